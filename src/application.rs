use crate::config::Settings;
use crate::log_messages::application as log;
use crate::middleware::{
    get_middleware_match, load_middleware_manifest, manifest_path, MiddlewareManifest,
    MiddlewareMatch,
};
use crate::response::BinaryContentTypes;
use crate::Result;
use tracing::{info, instrument};

/// Cold-start state: settings, the loaded manifest and its compiled matchers
pub struct Application {
    settings: Settings,
    manifest: MiddlewareManifest,
    middleware_match: MiddlewareMatch,
    binary_classifier: BinaryContentTypes,
}

impl Application {
    /// Read the build output once for the given settings
    #[instrument(skip_all)]
    pub fn new(settings: Settings) -> Result<Self> {
        let manifest = load_middleware_manifest(&settings.routing.build_dir)?;
        let middleware_match = get_middleware_match(&manifest)?;
        let binary_classifier = settings.binary_classifier();

        Ok(Self {
            settings,
            manifest,
            middleware_match,
            binary_classifier,
        })
    }

    /// Log what the routing layer will use
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<()> {
        info!(
            manifest = %manifest_path(&self.settings.routing.build_dir).display(),
            host = self.settings.host(),
            binary_types = self.binary_classifier.len(),
            "{}",
            log::SETTINGS_LOADED
        );

        for matcher in &self.middleware_match {
            info!(
                regexp = matcher.as_str(),
                original_source = matcher.original_source(),
                "{}",
                log::MATCHER
            );
        }

        info!(matchers = self.middleware_match.len(), "{}", log::FINISHED);
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn manifest(&self) -> &MiddlewareManifest {
        &self.manifest
    }

    pub fn middleware_match(&self) -> &MiddlewareMatch {
        &self.middleware_match
    }

    pub fn binary_classifier(&self) -> &BinaryContentTypes {
        &self.binary_classifier
    }
}
