use bnx_catalog::Catalog;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn run(catalog: &Catalog, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog.stats(), flags.format)
}
