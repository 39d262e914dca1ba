//! `movesmith serve`

use movesmith_server::{Server, ServerConfig};

use crate::error::CliResult;
use crate::output::print_success;

/// Execute `serve`: `listen` overrides the configured address
pub async fn execute(config: ServerConfig, listen: Option<&str>) -> CliResult<()> {
    let config = match listen {
        Some(listen) => config.with_listen(listen)?,
        None => config,
    };
    print_success(&format!(
        "movesmith web shell on http://{}",
        config.listen_addr
    ));
    Server::new(config).run().await?;
    Ok(())
}
