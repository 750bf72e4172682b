//! Uniform random choice among candidate moves.

use rand::Rng;
use smallvec::SmallVec;

/// Remove and return one element of `candidates`, chosen uniformly.
///
/// The remaining candidates keep their relative order, so repeated draws
/// from the same list behave like drawing without replacement.
///
/// Returns `None` when `candidates` is empty. Rules branch on emptiness
/// before choosing; a `None` here means the rule's own precondition failed
/// and should be reported as a `StepError::InvariantViolated`.
///
/// ```
/// use cellsoc_automaton::take_uniform;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use smallvec::{smallvec, SmallVec};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let mut picks: SmallVec<[u8; 8]> = smallvec![1, 2, 3];
/// let first = take_uniform(&mut rng, &mut picks).unwrap();
/// assert!(!picks.contains(&first));
/// assert_eq!(picks.len(), 2);
/// ```
pub fn take_uniform<R, T>(rng: &mut R, candidates: &mut SmallVec<[T; 8]>) -> Option<T>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let i = rng.random_range(0..candidates.len());
    Some(candidates.remove(i))
}
