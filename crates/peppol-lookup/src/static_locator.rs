//! StaticLocator: one configured endpoint for every participant.

use url::Url;

use peppol_common::ParticipantIdentifier;

use crate::config::{Settings, LOCATOR_HOSTNAME_KEY};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::locator::Locator;

/// A locator that ignores the participant and always returns the same endpoint.
///
/// Useful for test networks and for deployments where every document goes
/// through a single access point. Construction validates the endpoint;
/// `lookup` never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocator {
    default_uri: Endpoint,
}

impl StaticLocator {
    /// Build from an endpoint URI string. The string is returned verbatim by
    /// every lookup.
    ///
    /// Fails with `InvalidConfiguration` if the string is empty, needs
    /// percent-encoding, does not parse, or has no host.
    pub fn new(uri: &str) -> Result<Self> {
        let endpoint = Endpoint::parse(uri).map_err(|e| {
            tracing::warn!(endpoint = uri, error = %e, "static locator endpoint rejected");
            e
        })?;
        Ok(Self::configured(endpoint))
    }

    /// Build from an already-parsed URL. It must have a host.
    pub fn from_url(uri: Url) -> Result<Self> {
        let endpoint = Endpoint::from_url(uri).map_err(|e| {
            tracing::warn!(error = %e, "static locator endpoint rejected");
            e
        })?;
        Ok(Self::configured(endpoint))
    }

    /// Build from the `lookup.locator.hostname` setting.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let uri = settings.require(LOCATOR_HOSTNAME_KEY)?;
        Self::new(uri)
    }

    fn configured(default_uri: Endpoint) -> Self {
        tracing::debug!(endpoint = %default_uri, "static locator configured");
        Self { default_uri }
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.default_uri
    }
}

impl Locator for StaticLocator {
    fn lookup(&self, participant: &ParticipantIdentifier) -> Result<Endpoint> {
        tracing::trace!(
            participant = %participant,
            endpoint = %self.default_uri,
            "static lookup"
        );
        Ok(self.default_uri.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peppol_common::Scheme;
    use proptest::prelude::*;

    #[test]
    fn test_ignores_participant() {
        let locator = StaticLocator::new("https://example.org/as4").unwrap();

        let a = ParticipantIdentifier::with_default_scheme("9908:987654321");
        let b = ParticipantIdentifier::of("something-else", Scheme::of("other"));

        assert_eq!(locator.lookup(&a).unwrap().as_str(), "https://example.org/as4");
        assert_eq!(locator.lookup(&b).unwrap().as_str(), "https://example.org/as4");
    }

    #[test]
    fn test_returns_configured_text() {
        let participant = ParticipantIdentifier::with_default_scheme("9908:1");
        for uri in ["https://ap.example.org", "https://AP.Example.org:443/as4"] {
            let locator = StaticLocator::new(uri).unwrap();
            assert_eq!(locator.lookup(&participant).unwrap().as_str(), uri);
        }
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        let bad = [
            "",
            "   ",
            "not a uri",
            "/relative/path",
            "mailto:ap@example.org",
            "https://",
            "https://ap.example.org/a s4",
        ];
        for uri in bad {
            let err = StaticLocator::new(uri).unwrap_err();
            assert!(err.is_configuration(), "{:?} gave {:?}", uri, err);
        }
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings::builder()
            .set(LOCATOR_HOSTNAME_KEY, "https://ap.example.org:8443/as4")
            .build();
        let locator = StaticLocator::from_settings(&settings).unwrap();
        assert_eq!(locator.endpoint().url().port(), Some(8443));

        let err = StaticLocator::from_settings(&Settings::default()).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(LOCATOR_HOSTNAME_KEY));
    }

    #[test]
    fn test_from_settings_malformed_value() {
        let settings = Settings::builder().set(LOCATOR_HOSTNAME_KEY, "::::").build();
        assert!(StaticLocator::from_settings(&settings)
            .unwrap_err()
            .is_configuration());
    }

    proptest! {
        #[test]
        fn test_lookup_is_constant(
            scheme in "[a-z0-9-]{1,24}",
            value in "[A-Za-z0-9:._-]{1,40}",
        ) {
            let locator = StaticLocator::new("https://example.org/as4").unwrap();
            let participant = ParticipantIdentifier::of(value, Scheme::of(scheme));
            let endpoint = locator.lookup(&participant).unwrap();
            prop_assert_eq!(&endpoint, locator.endpoint());
        }
    }
}
