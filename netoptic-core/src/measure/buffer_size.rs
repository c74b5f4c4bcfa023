use logos::{Lexer, Logos};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Amount of buffering available on a link, in microseconds.
///
/// A larger buffer absorbs bursts: it dampens the random noise of the
/// traffic model and reduces the headroom that has to be provisioned on top
/// of the actual load. Both estimators are calibrated for buffers in
/// `[0, 500]µs`.
///
/// # Example
///
/// ```
/// use netoptic_core::measure::BufferSize;
///
/// // validated construction
/// let buffer = BufferSize::new(250.0).unwrap();
/// assert_eq!(buffer.to_string(), "250µs");
///
/// // parsed, with a unit
/// let parsed: BufferSize = "0.25ms".parse().unwrap();
/// assert_eq!(parsed, buffer);
///
/// // out of range values are rejected...
/// assert!(BufferSize::new(750.0).is_err());
/// // ...unless explicitly clamped
/// assert_eq!(BufferSize::clamped(750.0), BufferSize::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct BufferSize(f64);

impl BufferSize {
    /// No buffering at all.
    pub const ZERO: Self = Self(0.0);

    /// The largest buffer the models are calibrated for.
    pub const MAX: Self = Self(crate::defaults::MAX_BUFFER_US);

    /// Create a validated buffer size.
    ///
    /// # Errors
    ///
    /// Returns an error if `micros` is not in `[0.0, 500.0]` (including NaN).
    pub fn new(micros: f64) -> Result<Self, BufferSizeError> {
        if !(Self::ZERO.0..=Self::MAX.0).contains(&micros) {
            return Err(BufferSizeError(micros));
        }
        Ok(Self(micros))
    }

    /// Create a buffer size, clamping `micros` into `[0.0, 500.0]`.
    ///
    /// `NaN` is mapped to [`BufferSize::ZERO`].
    ///
    /// ```
    /// # use netoptic_core::measure::BufferSize;
    /// assert_eq!(BufferSize::clamped(-3.0), BufferSize::ZERO);
    /// assert_eq!(BufferSize::clamped(f64::NAN), BufferSize::ZERO);
    /// assert_eq!(BufferSize::clamped(320.5).micros(), 320.5);
    /// ```
    pub fn clamped(micros: f64) -> Self {
        if micros.is_nan() {
            return Self::ZERO;
        }
        Self(micros.clamp(Self::ZERO.0, Self::MAX.0))
    }

    /// Create a buffer size without any validation.
    ///
    /// Values outside `[0, 500]µs` are accepted and flow through the models
    /// unchanged: the smoothing factor and the headroom may become negative.
    /// Use this only when the degenerate outputs are wanted.
    #[inline(always)]
    pub const fn unchecked(micros: f64) -> Self {
        Self(micros)
    }

    /// Returns the buffer size in microseconds.
    #[inline(always)]
    pub fn micros(self) -> f64 {
        self.0
    }

    /// Returns `true` if the value lies in `[0, 500]µs`.
    pub fn is_in_range(self) -> bool {
        (Self::ZERO.0..=Self::MAX.0).contains(&self.0)
    }
}

impl Default for BufferSize {
    fn default() -> Self {
        crate::defaults::DEFAULT_BUFFER_SIZE
    }
}

impl fmt::Display for BufferSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}µs", self.0)
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum Token {
    #[token("ns")]
    NanoSeconds,
    #[regex("us|µs|μs")]
    MicroSeconds,
    #[token("ms")]
    MilliSeconds,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Value,
}

impl FromStr for BufferSize {
    type Err = BufferSizeParseError;

    /// Parses `"250us"`, `"250µs"`, `"0.25ms"`, `"250000ns"` or a bare
    /// number of microseconds such as `"250"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::<'_, Token>::new(s);

        let Some(Ok(Token::Value)) = lex.next() else {
            return Err(BufferSizeParseError::InvalidNumber);
        };
        let number: f64 = lex
            .slice()
            .parse()
            .map_err(|_| BufferSizeParseError::InvalidNumber)?;

        let micros = match lex.next() {
            None => number,
            Some(Ok(Token::NanoSeconds)) => number / 1_000.0,
            Some(Ok(Token::MicroSeconds)) => number,
            Some(Ok(Token::MilliSeconds)) => number * 1_000.0,
            Some(Ok(Token::Value)) => return Err(BufferSizeParseError::TrailingInput),
            Some(Err(())) => return Err(BufferSizeParseError::UnknownUnit),
        };

        if lex.next().is_some() {
            return Err(BufferSizeParseError::TrailingInput);
        }

        Ok(Self::new(micros)?)
    }
}

/// Error returned when constructing a [`BufferSize`] with a value
/// outside `[0, 500]µs`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("buffer size must be in [0, 500]µs, got {0}")]
pub struct BufferSizeError(pub f64);

/// Error returned when parsing a [`BufferSize`] from a string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BufferSizeParseError {
    /// The string does not start with a non negative number.
    #[error("expecting a non negative number")]
    InvalidNumber,
    /// The unit is not one of `ns`, `us`, `µs` or `ms`.
    #[error("expecting a unit (ns, us, µs, ms)")]
    UnknownUnit,
    /// Something follows the unit.
    #[error("not expecting any other tokens after the buffer size")]
    TrailingInput,
    /// The value is outside `[0, 500]µs`.
    #[error("{0}")]
    OutOfRange(#[from] BufferSizeError),
}
