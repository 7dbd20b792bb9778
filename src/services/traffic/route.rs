use std::path::Path;

use tracing::{debug, trace};

use super::{InterfaceName, SysFs};

const DEFAULT_DESTINATION: &str = "00000000";

/// Infers the preferred interface from the IPv4 routing table.
pub struct DefaultRouteResolver<'a> {
    fs: &'a dyn SysFs,
    route_table: &'a Path,
    fallback: &'a InterfaceName,
}

impl<'a> DefaultRouteResolver<'a> {
    /// Resolver reading `route_table` (normally `/proc/net/route`)
    pub fn new(fs: &'a dyn SysFs, route_table: &'a Path, fallback: &'a InterfaceName) -> Self {
        Self {
            fs,
            route_table,
            fallback,
        }
    }

    /// Interface of the first default route, or the fallback.
    ///
    /// Never fails: an unreadable table or one without a default route
    /// resolves to the fallback interface.
    pub fn resolve(&self) -> InterfaceName {
        let table = match self.fs.read_to_string(self.route_table) {
            Ok(table) => table,
            Err(e) => {
                debug!("Cannot read {}: {e}", self.route_table.display());
                return self.fallback.clone();
            }
        };

        parse_default_interface(&table).unwrap_or_else(|| {
            debug!("No default route, falling back to {}", self.fallback);
            self.fallback.clone()
        })
    }
}

/// First interface whose destination column is all zeroes.
///
/// The first line is the column header.
pub fn parse_default_interface(table: &str) -> Option<InterfaceName> {
    table.lines().skip(1).find_map(|line| {
        let mut columns = line.split_whitespace();
        let iface = columns.next()?;
        let destination = columns.next()?;
        trace!(iface, destination, "Route row");

        if destination == DEFAULT_DESTINATION {
            InterfaceName::new(iface).ok()
        } else {
            None
        }
    })
}
