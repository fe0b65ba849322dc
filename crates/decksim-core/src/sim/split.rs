/// Partitions `total` trials across `workers` shares. Integer division with
/// the remainder assigned entirely to share 0, so the shares sum to `total`
/// exactly and no trial is lost or duplicated.
pub fn split_trials(total: u64, workers: usize) -> Vec<u64> {
    assert!(workers >= 1, "at least one worker share is required");
    let base = total / workers as u64;
    let mut shares = vec![base; workers];
    shares[0] += total % workers as u64;
    shares
}
