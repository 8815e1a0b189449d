/// Strategy for checking a submitted secret against the stored one. The
/// auth flow never inspects secrets directly, so a hash-based verifier can
/// replace the default without touching it.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, submitted: &str, stored: &str) -> bool;
}

/// Direct equality against the stored value — what the current data model
/// contains. Not an endorsement of plaintext storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextVerifier;

impl CredentialVerifier for PlainTextVerifier {
    fn verify(&self, submitted: &str, stored: &str) -> bool {
        submitted == stored
    }
}
