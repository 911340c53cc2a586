use log::info;

use super::config::{NetworkConfig, NetworkFormat};
use super::{features, table};
use crate::{BikewayNetwork, Error};

/// Loads the bikeway network described by the configuration
///
/// # Errors
///
/// Returns an error if the export cannot be read or contains edges that
/// cannot be represented
pub fn create_network(config: &NetworkConfig) -> Result<BikewayNetwork, Error> {
    validate_config(config)?;

    let format = config.resolved_format();
    info!(
        "Reading bikeway network ({format:?}, {:?}): {}",
        config.projection,
        config.path.display()
    );

    let records = match format {
        NetworkFormat::GeoJson => features::read_edges(&config.path)?,
        NetworkFormat::Csv => table::read_edges(&config.path)?,
    };

    let network = BikewayNetwork::new(records, config.projection, config.geometry_format)?;
    if network.edge_count() == 0 {
        log::warn!("Network export contains no edges - every snap will fail");
    }

    info!(
        "Bikeway network loaded: {} nodes, {} edges, {} traversable arcs",
        network.node_count(),
        network.edge_count(),
        network.graph.edge_count()
    );

    // Export parsing leaves freed allocations in the heap; hand them back to
    // the OS before the server settles into its steady state.
    // SAFETY: malloc_trim only exists in glibc, guarded by the cfg below.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe {
        if libc::malloc_trim(0) == 0 {
            log::debug!("No memory returned by heap trimming");
        } else {
            log::debug!("Successfully trimmed unused heap memory");
        }
    }

    Ok(network)
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if !config.path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Network file not found: {}", config.path.display()),
        )));
    }

    Ok(())
}
