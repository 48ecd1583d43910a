use std::sync::Arc;

use romantica_catalog::{
    CatalogLoader, JsonRecordSource, LoaderConfig, MountedCatalog, RecordSource,
    StaticRecordSource,
};
use romantica_messaging::WhatsAppContact;

use crate::config::StorefrontConfig;

/// Everything a page handler needs to build its own catalog.
///
/// Holds no catalog data: every page request mounts a fresh loader, so two
/// concurrent pages never share a loaded collection.
pub struct StorefrontServices {
    source: Arc<dyn RecordSource>,
    loader: LoaderConfig,
    contact: WhatsAppContact,
}

impl StorefrontServices {
    pub fn new(source: Arc<dyn RecordSource>, loader: LoaderConfig, contact: WhatsAppContact) -> Self {
        Self {
            source,
            loader,
            contact,
        }
    }

    /// Start a catalog load for one page render. Dropping the handle (e.g. the
    /// client disconnected) cancels the load.
    pub fn mount_catalog(&self) -> MountedCatalog {
        CatalogLoader::mount(Arc::clone(&self.source), self.loader)
    }

    pub fn contact(&self) -> &WhatsAppContact {
        &self.contact
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }
}

pub fn build_services(config: &StorefrontConfig) -> StorefrontServices {
    let source: Arc<dyn RecordSource> = match &config.catalog_file {
        Some(path) => Arc::new(JsonRecordSource::from_file(path.clone())),
        None => Arc::new(StaticRecordSource::fixture()),
    };

    StorefrontServices::new(
        source,
        LoaderConfig {
            latency: config.catalog_latency,
        },
        WhatsAppContact::new(config.whatsapp_phone.clone()),
    )
}
