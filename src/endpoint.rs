//! Descriptors for remote operations.
//!
//! An [`Endpoint`] is plain data: where the operation lives, which verb it
//! uses and which [`Param`]s it takes. The generic caller in
//! [`Client`](crate::Client) reads these to validate arguments and build the
//! request, so adding an operation means adding a descriptor to
//! [`endpoints`](crate::endpoints).

/// The service an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// The main services API. Calls carry the `key` header.
    Primary,
    /// The hastebin text-sharing service. Calls carry no key.
    Haste,
}

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl Verb {
    pub(crate) fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
        }
    }
}

/// How a provided value is coerced before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Sent as given.
    Text,
    /// Must parse as a finite number.
    Number,
    /// Must be a bool or the text `true`/`false`.
    Bool,
    /// Like [`Kind::Bool`], but anything unparseable becomes `false`.
    LenientBool,
    /// A strict bool that is only sent when `true`.
    Switch,
}

/// Whether a parameter must be provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Missing values fail the call with this message.
    Required(&'static str),
    /// Required unless the named [`Kind::Switch`] parameter is on, in which
    /// case the parameter is dropped entirely.
    RequiredUnless {
        /// Name of the switch.
        flag: &'static str,
        /// Failure message when neither is provided.
        message: &'static str,
    },
    /// Missing values are replaced with this one.
    Default(&'static str),
    /// Missing values are left out of the request.
    Optional,
    /// Missing values are sent as JSON `null`.
    Nullable,
}

/// Where a parameter ends up in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Appended to the path as a percent-encoded segment.
    Path,
    /// URL-encoded query pair.
    Query,
    /// Request header.
    Header,
    /// Field of a JSON body.
    Body,
    /// The whole body, as text.
    RawBody,
    /// Replaces the host's base URL for this call.
    BaseUrl,
    /// Not sent; only used to shape the response.
    Local,
}

/// A single parameter of an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Name callers use in [`Params`](crate::Params).
    pub name: &'static str,
    /// Name on the wire.
    pub wire: &'static str,
    /// Value coercion.
    pub kind: Kind,
    /// Presence rule.
    pub requirement: Requirement,
    /// Placement in the request.
    pub location: Location,
    /// Lowercase text values before sending.
    pub lowercase: bool,
    /// Failure message for values of the wrong kind.
    pub invalid: &'static str,
}

impl Param {
    const fn new(name: &'static str, requirement: Requirement) -> Self {
        Param {
            name,
            wire: name,
            kind: Kind::Text,
            requirement,
            location: Location::Query,
            lowercase: false,
            invalid: "",
        }
    }

    /// A required query parameter.
    pub const fn required(name: &'static str, message: &'static str) -> Self {
        Self::new(name, Requirement::Required(message))
    }

    /// A query parameter with a default value.
    pub const fn with_default(name: &'static str, value: &'static str) -> Self {
        Self::new(name, Requirement::Default(value))
    }

    /// An optional query parameter.
    pub const fn optional(name: &'static str) -> Self {
        Self::new(name, Requirement::Optional)
    }

    /// A body field sent as `null` when missing.
    pub const fn nullable(name: &'static str) -> Self {
        Self::new(name, Requirement::Nullable).at(Location::Body)
    }

    /// A parameter required unless `flag` is on.
    pub const fn required_unless(
        name: &'static str,
        flag: &'static str,
        message: &'static str,
    ) -> Self {
        Self::new(name, Requirement::RequiredUnless { flag, message })
    }

    /// Moves the parameter to `location`.
    #[must_use]
    pub const fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Renames the parameter on the wire.
    #[must_use]
    pub const fn wire(mut self, wire: &'static str) -> Self {
        self.wire = wire;
        self
    }

    /// Requires a number, failing with `invalid` otherwise.
    #[must_use]
    pub const fn number(mut self, invalid: &'static str) -> Self {
        self.kind = Kind::Number;
        self.invalid = invalid;
        self
    }

    /// Requires a bool, failing with `invalid` otherwise.
    #[must_use]
    pub const fn boolean(mut self, invalid: &'static str) -> Self {
        self.kind = Kind::Bool;
        self.invalid = invalid;
        self
    }

    /// Coerces to a bool, falling back to `false`.
    #[must_use]
    pub const fn lenient_bool(mut self) -> Self {
        self.kind = Kind::LenientBool;
        self
    }

    /// A strict bool sent only when on.
    #[must_use]
    pub const fn switch(mut self, invalid: &'static str) -> Self {
        self.kind = Kind::Switch;
        self.invalid = invalid;
        self
    }

    /// Lowercases text before sending.
    #[must_use]
    pub const fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }
}

/// Message used when the service gives no usable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Always the same text.
    Fixed(&'static str),
    /// Text with `{name}` placeholders filled from resolved parameters.
    Template(&'static str),
    /// Chooses between two templates on a switch parameter.
    Flagged {
        /// Name of the switch.
        flag: &'static str,
        /// Used when the switch is on.
        set: &'static str,
        /// Used otherwise.
        unset: &'static str,
    },
}

impl Message {
    /// Renders the message, looking placeholders and switches up with
    /// `lookup`. Unknown placeholders are left as they are.
    pub fn render<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let template = match *self {
            Message::Fixed(text) => return text.to_string(),
            Message::Template(text) => text,
            Message::Flagged { flag, set, unset } => {
                if lookup(flag).as_deref() == Some("true") {
                    set
                } else {
                    unset
                }
            }
        };

        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match tail.find('}') {
                Some(end) => {
                    let name = &tail[1..end];
                    match lookup(name) {
                        Some(value) => out.push_str(&value),
                        None => out.push_str(&tail[..=end]),
                    }
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push_str(tail);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Post-processing applied to a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reshape {
    /// The decoded body is returned verbatim.
    None,
    /// A hastebin `{key}` reply becomes `{status, id, url}`, where the url
    /// ends with the value of the named extension parameter.
    Upload {
        /// Name of the parameter holding the file extension.
        extension: &'static str,
    },
}

/// One remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Unique dotted name, e.g. `platform.twitch`.
    pub name: &'static str,
    /// Service the endpoint lives on.
    pub host: Host,
    /// HTTP verb.
    pub verb: Verb,
    /// Path relative to the host's base URL.
    pub path: &'static str,
    /// Query pairs always sent before the parameters.
    pub fixed: &'static [(&'static str, &'static str)],
    /// Declared parameters, validated in order.
    pub params: &'static [Param],
    /// Failure message for a missing API key. `None` means the endpoint
    /// takes no key.
    pub missing_key: Option<&'static str>,
    /// Failure message when the service gives no usable answer.
    pub no_response: Message,
    /// Response post-processing.
    pub reshape: Reshape,
}

impl Endpoint {
    /// Returns the declared parameter called `name`.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Returns `true` if a call needs an API key.
    pub fn needs_key(&self) -> bool {
        self.missing_key.is_some()
    }
}
