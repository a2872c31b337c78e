//! Candidate match validation
//!
//! Validators give a recognizer a second opinion on a raw regex match:
//! accept it unchanged, accept it with an adjusted score, or reject it so
//! it never appears in any output.

/// Outcome of validating a candidate match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    /// Keep the candidate with its base score
    Accept,
    /// Keep the candidate and override its score
    AcceptWithScore(f32),
    /// Discard the candidate entirely
    Reject,
}

/// Closed set of validators a recognizer can bind
///
/// The default is [`MatchValidator::AcceptAll`]; in the built-in catalogue
/// only the national-ID recognizer binds [`MatchValidator::ElevenProof`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchValidator {
    /// Accept every candidate unchanged
    #[default]
    AcceptAll,
    /// Dutch 11-proof checksum over a 9-digit national ID (BSN)
    ElevenProof,
}

/// Score assigned to a national ID that passes the 11-proof
pub const VALIDATED_NATIONAL_ID_SCORE: f32 = 0.9;

impl MatchValidator {
    /// Resolve a validator name from the catalogue
    ///
    /// Unknown names are a configuration error, handled by the caller.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "accept_all" => Some(Self::AcceptAll),
            "eleven_proof" => Some(Self::ElevenProof),
            _ => None,
        }
    }

    /// Validate a matched substring
    pub fn validate(&self, matched_text: &str) -> Validation {
        match self {
            Self::AcceptAll => Validation::Accept,
            Self::ElevenProof => {
                if eleven_proof(matched_text) {
                    Validation::AcceptWithScore(VALIDATED_NATIONAL_ID_SCORE)
                } else {
                    Validation::Reject
                }
            }
        }
    }
}

/// Check a number against the Dutch 11-proof
///
/// Strips all non-digit characters and requires exactly nine digits. The
/// weighted sum `Σ d[i]·(9−i)` over the first eight digits, minus the ninth
/// digit, must be divisible by 11.
pub fn eleven_proof(number: &str) -> bool {
    let digits: Vec<i32> = number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as i32 - '0' as i32)
        .collect();

    if digits.len() != 9 {
        return false;
    }

    let weighted: i32 = digits[..8]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (9 - i as i32))
        .sum();

    (weighted - digits[8]) % 11 == 0
}
