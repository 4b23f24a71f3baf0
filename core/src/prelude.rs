//! # Smithy prelude traits
//!
//! Concrete [`crate::schema::SmithyTrait`] implementations for the traits defined by the
//! [Smithy prelude](https://smithy.io/2.0/spec/model.html#prelude-shapes). Annotation
//! traits (no meaningful value) are generated with [`crate::annotation_trait`]; traits
//! that carry data are hand-implemented below.

pub use crate::schema::prelude::{
    BIG_DECIMAL, BIG_INTEGER, BLOB, BOOLEAN, BYTE, DOCUMENT, DOUBLE, FLOAT, INTEGER, LONG, SHORT,
    STRING, TIMESTAMP, get_schema_for_type,
};

use crate::annotation_trait;
use crate::schema::{DefaultDocumentValue, ShapeId, SmithyTrait, StaticTraitId};
use crate::static_id;
use std::sync::LazyLock;

// ============================================================================
// Annotation traits (zero-value markers)
// ============================================================================

annotation_trait!(SensitiveTrait, "smithy.api#sensitive");
annotation_trait!(StreamingTrait, "smithy.api#streaming");
annotation_trait!(SparseTrait, "smithy.api#sparse");
annotation_trait!(RequiredTrait, "smithy.api#required");
annotation_trait!(InternalTrait, "smithy.api#internal");
annotation_trait!(EventHeaderTrait, "smithy.api#eventHeader");
annotation_trait!(EventPayloadTrait, "smithy.api#eventPayload");
annotation_trait!(IdempotencyTokenTrait, "smithy.api#idempotencyToken");
annotation_trait!(HttpLabelTrait, "smithy.api#httpLabel");
annotation_trait!(HttpPayloadTrait, "smithy.api#httpPayload");
annotation_trait!(HttpQueryParamsTrait, "smithy.api#httpQueryParams");
annotation_trait!(HttpResponseCodeTrait, "smithy.api#httpResponseCode");
annotation_trait!(HttpChecksumRequiredTrait, "smithy.api#httpChecksumRequired");
annotation_trait!(HostLabelTrait, "smithy.api#hostLabel");

// ============================================================================
// Value-carrying traits
// ============================================================================

/// `@default` — the value a member takes when absent from the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultTrait(pub DefaultDocumentValue);
impl DefaultTrait {
    #[must_use]
    pub const fn new(value: DefaultDocumentValue) -> Self {
        DefaultTrait(value)
    }

    #[must_use]
    pub const fn value(&self) -> &DefaultDocumentValue {
        &self.0
    }
}
static_id!(DefaultTrait, "smithy.api#default");
impl SmithyTrait for DefaultTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.0
    }
}

/// `@jsonName` — overrides the wire field name used by the JSON protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNameTrait {
    name: String,
    value: DefaultDocumentValue,
}
impl JsonNameTrait {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let value = DefaultDocumentValue::String(name.clone());
        JsonNameTrait { name, value }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
static_id!(JsonNameTrait, "smithy.api#jsonName");
impl SmithyTrait for JsonNameTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@xmlName`/`@xmlAttribute`-style media type hint, e.g. for `@mediaType`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaTypeTrait {
    media_type: String,
    value: DefaultDocumentValue,
}
impl MediaTypeTrait {
    #[must_use]
    pub fn new(media_type: impl Into<String>) -> Self {
        let media_type = media_type.into();
        let value = DefaultDocumentValue::String(media_type.clone());
        MediaTypeTrait { media_type, value }
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}
static_id!(MediaTypeTrait, "smithy.api#mediaType");
impl SmithyTrait for MediaTypeTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@length` — min/max size constraint on a string, blob, collection, or map.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthTrait {
    min: usize,
    max: usize,
    value: DefaultDocumentValue,
}
impl LengthTrait {
    #[must_use]
    pub fn builder() -> LengthTraitBuilder {
        LengthTraitBuilder::default()
    }

    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }
}
static_id!(LengthTrait, "smithy.api#length");
impl SmithyTrait for LengthTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

#[derive(Default)]
pub struct LengthTraitBuilder {
    min: usize,
    max: usize,
}
impl LengthTraitBuilder {
    #[must_use]
    pub const fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    #[must_use]
    pub const fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn build(self) -> LengthTrait {
        LengthTrait {
            min: self.min,
            max: self.max,
            value: DefaultDocumentValue::Null,
        }
    }
}

/// Fault side of an `@error` trait: whether the error is the client's or server's fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFault {
    Client,
    Server,
}

/// `@error("client"|"server")`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTrait {
    fault: ErrorFault,
    value: DefaultDocumentValue,
}
impl ErrorTrait {
    #[must_use]
    pub fn new(fault: ErrorFault) -> Self {
        let value = DefaultDocumentValue::String(
            match fault {
                ErrorFault::Client => "client",
                ErrorFault::Server => "server",
            }
            .to_string(),
        );
        ErrorTrait { fault, value }
    }

    #[must_use]
    pub const fn fault(&self) -> ErrorFault {
        self.fault
    }
}
static_id!(ErrorTrait, "smithy.api#error");
impl SmithyTrait for ErrorTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@httpError` — fixed HTTP status code for a modeled error shape.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpErrorTrait {
    code: u16,
    value: DefaultDocumentValue,
}
impl HttpErrorTrait {
    #[must_use]
    pub fn new(code: u16) -> Self {
        assert!(
            code > 200 && code < 599,
            "HTTP error code must be in the range (200, 599), found {code}"
        );
        let value = DefaultDocumentValue::Integer(i32::from(code));
        HttpErrorTrait { code, value }
    }

    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }
}
static_id!(HttpErrorTrait, "smithy.api#httpError");
impl SmithyTrait for HttpErrorTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@http` header binding for a member (`@httpHeader("X-Foo")`).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpHeaderTrait {
    name: String,
    value: DefaultDocumentValue,
}
impl HttpHeaderTrait {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let value = DefaultDocumentValue::String(name.clone());
        HttpHeaderTrait { name, value }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
static_id!(HttpHeaderTrait, "smithy.api#httpHeader");
impl SmithyTrait for HttpHeaderTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@httpPrefixHeaders("X-Foo-")`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpPrefixHeadersTrait {
    prefix: String,
    value: DefaultDocumentValue,
}
impl HttpPrefixHeadersTrait {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let value = DefaultDocumentValue::String(prefix.clone());
        HttpPrefixHeadersTrait { prefix, value }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
static_id!(HttpPrefixHeadersTrait, "smithy.api#httpPrefixHeaders");
impl SmithyTrait for HttpPrefixHeadersTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@httpQuery("key")`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpQueryTrait {
    key: String,
    value: DefaultDocumentValue,
}
impl HttpQueryTrait {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let value = DefaultDocumentValue::String(key.clone());
        HttpQueryTrait { key, value }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
static_id!(HttpQueryTrait, "smithy.api#httpQuery");
impl SmithyTrait for HttpQueryTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@endpoint(hostPrefix: "{foo}.")`.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointTrait {
    host_prefix: String,
    value: DefaultDocumentValue,
}
impl EndpointTrait {
    #[must_use]
    pub fn new(host_prefix: impl Into<String>) -> Self {
        let host_prefix = host_prefix.into();
        let value = DefaultDocumentValue::String(host_prefix.clone());
        EndpointTrait { host_prefix, value }
    }

    #[must_use]
    pub fn host_prefix(&self) -> &str {
        &self.host_prefix
    }
}
static_id!(EndpointTrait, "smithy.api#endpoint");
impl SmithyTrait for EndpointTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}

/// `@timestampFormat("date-time"|"http-date"|"epoch-seconds")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    DateTime,
    HttpDate,
    EpochSeconds,
}
impl TimestampFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TimestampFormat::DateTime => "date-time",
            TimestampFormat::HttpDate => "http-date",
            TimestampFormat::EpochSeconds => "epoch-seconds",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimestampFormatTrait {
    format: TimestampFormat,
    value: DefaultDocumentValue,
}
impl TimestampFormatTrait {
    #[must_use]
    pub fn new(format: TimestampFormat) -> Self {
        let value = DefaultDocumentValue::String(format.as_str().to_string());
        TimestampFormatTrait { format, value }
    }

    #[must_use]
    pub const fn format(&self) -> TimestampFormat {
        self.format
    }
}
static_id!(TimestampFormatTrait, "smithy.api#timestampFormat");
impl SmithyTrait for TimestampFormatTrait {
    fn id(&self) -> &ShapeId {
        Self::trait_id()
    }

    fn value(&self) -> &DefaultDocumentValue {
        &self.value
    }
}
