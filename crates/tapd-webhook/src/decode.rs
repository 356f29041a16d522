//! Payload classification and decoding.
//!
//! Decoding is two-step: [`classify`] reads the `event` discriminator from a
//! generic JSON object, then [`decode`] looks the discriminator up in a
//! static kind → decoder table and decodes the whole payload into that
//! kind's shape. [`parse_webhook_event`] composes both.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DecodeError, Result};
use crate::event::*;
use crate::kind::EventKind;

/// Decodes a full payload into one specific shape.
type Decoder = fn(&[u8]) -> serde_json::Result<Event>;

fn decode_as<T: WebhookEvent>(payload: &[u8]) -> serde_json::Result<Event> {
    serde_json::from_slice::<T>(payload).map(Into::into)
}

macro_rules! define_decoders {
    ($($variant:ident => $wire:tt, $shape:ident, $listener:ident, $method:ident,
        $probe:ident, $register:ident, $family:ident;)+) => {
        /// Static kind → decoder table.
        const DECODERS: &[(EventKind, Decoder)] = &[
            $((EventKind::$variant, decode_as::<$shape> as Decoder),)+
        ];
    };
}

for_each_event_kind!(define_decoders);

fn decoder_for(kind: &str) -> Option<(EventKind, Decoder)> {
    DECODERS
        .iter()
        .find(|(k, _)| k.as_str() == kind)
        .copied()
}

/// Returns the `event` discriminator of a payload.
///
/// # Errors
///
/// - [`DecodeError::MalformedPayload`] if the payload is not a JSON object.
/// - [`DecodeError::MissingDiscriminator`] if `event` is absent or not a
///   string.
pub fn classify(payload: &[u8]) -> Result<String> {
    let raw: Map<String, Value> = serde_json::from_slice(payload)?;
    match raw.get("event") {
        Some(Value::String(kind)) => Ok(kind.clone()),
        _ => Err(DecodeError::MissingDiscriminator),
    }
}

/// Decodes `payload` as the shape registered for `kind`.
///
/// Unknown payload keys are ignored.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedKind`] if `kind` has no registered shape.
/// - [`DecodeError::MalformedPayload`] if the payload does not fit the shape.
pub fn decode(kind: &str, payload: &[u8]) -> Result<(EventKind, Event)> {
    let (kind, decoder) =
        decoder_for(kind).ok_or_else(|| DecodeError::UnsupportedKind(kind.to_string()))?;
    let event = decoder(payload)?;
    debug!(kind = %kind, id = %event.envelope().id, "decoded webhook event");
    Ok((kind, event))
}

/// Classifies and decodes a raw webhook payload.
///
/// This is the single entry point for turning request bodies into typed
/// events.
///
/// # Example
///
/// ```
/// use tapd_webhook::{parse_webhook_event, Event, EventKind};
///
/// let payload = br#"{"event":"story::create","workspace_id":"111","id":"999"}"#;
/// let (kind, event) = parse_webhook_event(payload).unwrap();
///
/// assert_eq!(kind, EventKind::StoryCreate);
/// assert!(matches!(event, Event::StoryCreate(ref e) if e.envelope.id == "999"));
/// ```
pub fn parse_webhook_event(payload: &[u8]) -> Result<(EventKind, Event)> {
    let kind = classify(payload)?;
    decode(&kind, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_decoder() {
        assert_eq!(DECODERS.len(), EventKind::ALL.len());
        for kind in EventKind::ALL {
            let (found, _) = decoder_for(kind.as_str()).unwrap();
            assert_eq!(found, *kind);
        }
    }

    #[test]
    fn test_classify_reads_discriminator() {
        let kind = classify(br#"{"event":"bug::delete","id":"1"}"#).unwrap();
        assert_eq!(kind, "bug::delete");
    }

    #[test]
    fn test_classify_missing_event() {
        let err = classify(br#"{"workspace_id":"111"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingDiscriminator));
    }

    #[test]
    fn test_classify_non_string_event() {
        let err = classify(br#"{"event":42}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingDiscriminator));
    }

    #[test]
    fn test_classify_not_json() {
        let err = classify(b"not json").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));

        let err = classify(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
    }

    #[test]
    fn test_decode_unsupported_kind() {
        let err = decode("bogus::kind", br#"{"event":"bogus::kind"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedKind(ref k) if k == "bogus::kind"));
    }

    #[test]
    fn test_decode_wrong_field_type() {
        let err = decode("story::create", br#"{"event":"story::create","id":123}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let (kind, event) = decode(
            "task::delete",
            br#"{"event":"task::delete","id":"7","brand_new_field":{"x":1}}"#,
        )
        .unwrap();
        assert_eq!(kind, EventKind::TaskDelete);
        assert!(matches!(event, Event::TaskDelete(ref e) if e.envelope.id == "7"));
    }

    #[test]
    fn test_parse_scenario_story_create() {
        let (kind, event) =
            parse_webhook_event(br#"{"event":"story::create","workspace_id":"111","id":"999"}"#)
                .unwrap();
        assert_eq!(kind, EventKind::StoryCreate);
        match event {
            Event::StoryCreate(e) => {
                assert_eq!(e.envelope.workspace_id, "111");
                assert_eq!(e.envelope.id, "999");
                assert_eq!(e.name, "");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bogus_kind() {
        let err = parse_webhook_event(br#"{"event":"bogus::kind"}"#).unwrap_err();
        assert!(err.is_unsupported_kind());
    }
}
