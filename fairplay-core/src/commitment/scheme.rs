/// Trait for commitment schemes
pub trait CommitmentScheme {
    type Key: ?Sized;
    type Commitment;

    /// Bind `message` under `key`. Must be a pure function of both inputs.
    fn commit(key: &Self::Key, message: &[u8]) -> Self::Commitment;

    /// Check a revealed key and message against a published commitment
    fn verify(commitment: &Self::Commitment, key: &Self::Key, message: &[u8]) -> bool;
}
