/// Read-only snapshot of the authentication capability.
///
/// The caller owns the real session and passes a snapshot along with any
/// message that needs it; the core never reaches for global auth state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// The provider has not reported yet.
    #[default]
    Loading,
    SignedOut,
    SignedIn { user: String },
}
