use chrono::{DateTime, Utc};
use rand::Rng;

/// Domain suffix of every event UID.
pub const UID_DOMAIN: &str = "tamilpanchangam.com";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Builds an event UID: `<unix millis>-<9 base36 chars>@tamilpanchangam.com`.
pub fn generate_uid<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();
    format!("{}-{suffix}@{UID_DOMAIN}", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uid_shape() {
        let now = Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let uid = generate_uid(now, &mut rng);
        let (local, domain) = uid.split_once('@').unwrap();
        let (millis, suffix) = local.split_once('-').unwrap();

        assert_eq!(domain, UID_DOMAIN);
        assert_eq!(millis, now.timestamp_millis().to_string());
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_uids_differ_within_same_millisecond() {
        let now = Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let first = generate_uid(now, &mut rng);
        let second = generate_uid(now, &mut rng);

        assert_ne!(first, second);
    }
}
