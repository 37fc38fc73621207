/// Command-line definition.
use clap::Parser;

/// Map a network share to the first free drive letter and open it in
/// Explorer. With no argument, the share path is taken from the
/// clipboard.
#[derive(Debug, Parser)]
#[command(name = "QuickMap", version, about)]
pub struct Args {
    /// UNC path of the share to map, e.g. \\fileserver\shared
    pub target: Option<String>,
}
