//! Destructive glitch primitives.
//!
//! Both primitives pick a segment uniformly from the guard-band range of the
//! buffer as it is at call time, so repeated calls see the shrunken buffer.
//! Neither touches the buffer when it returns an error.

use crate::buffer::LineBuffer;
use crate::config::GuardBand;
use crate::error::{GlitchError, Result};
use rand::Rng;
use tracing::debug;

/// Pick a random segment index outside the guard band.
fn pick_segment<R: Rng + ?Sized>(len: usize, guard: GuardBand, rng: &mut R) -> Result<usize> {
    let range = guard.eligible(len).ok_or(GlitchError::GuardBand {
        len,
        start_skip: guard.start_skip,
        end_skip: guard.end_skip,
    })?;
    Ok(rng.gen_range(range))
}

/// Delete one random segment and return it.
pub fn delete_random_line<R: Rng + ?Sized>(
    buffer: &mut LineBuffer,
    guard: GuardBand,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let index = pick_segment(buffer.len(), guard, rng)?;
    let removed = buffer.remove(index);
    debug!(index, bytes = removed.len(), "deleted line");
    Ok(removed)
}

/// Collapse one random segment down to a single random byte of itself.
///
/// The chosen segment is replaced by the one byte found at a random offset;
/// everything else in that segment is dropped. Returns the byte kept.
pub fn delete_random_byte<R: Rng + ?Sized>(
    buffer: &mut LineBuffer,
    guard: GuardBand,
    rng: &mut R,
) -> Result<u8> {
    let index = pick_segment(buffer.len(), guard, rng)?;
    let segment = buffer.get(index).unwrap_or_default();
    if segment.is_empty() {
        return Err(GlitchError::EmptySegment { index });
    }
    let offset = rng.gen_range(0..segment.len());
    let kept = segment[offset];
    debug!(
        index,
        offset,
        dropped = segment.len() - 1,
        "collapsed line to one byte"
    );
    buffer.replace(index, vec![kept]);
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ten_lines() -> LineBuffer {
        let text: Vec<String> = (0..10).map(|i| format!("L{}", i)).collect();
        LineBuffer::from_bytes(text.join("\n").as_bytes())
    }

    #[test]
    fn test_delete_line_removes_exactly_one() {
        let mut buffer = ten_lines();
        let mut rng = SmallRng::seed_from_u64(42);

        let removed = delete_random_line(&mut buffer, GuardBand::default(), &mut rng).unwrap();

        assert_eq!(buffer.len(), 9);
        assert!(!buffer.segments().contains(&removed));
    }

    #[test]
    fn test_delete_line_respects_guard_band() {
        let guard = GuardBand::default();
        for seed in 0..200 {
            let mut buffer = ten_lines();
            let mut rng = SmallRng::seed_from_u64(seed);
            let removed = delete_random_line(&mut buffer, guard, &mut rng).unwrap();

            let eligible = [&b"L3"[..], b"L4", b"L5", b"L6", b"L7"];
            assert!(eligible.contains(&removed.as_slice()), "seed {}", seed);
            let head: Vec<&[u8]> = (0..3).filter_map(|i| buffer.get(i)).collect();
            let tail: Vec<&[u8]> = (7..9).filter_map(|i| buffer.get(i)).collect();
            assert_eq!(head, vec![&b"L0"[..], b"L1", b"L2"]);
            assert_eq!(tail, vec![&b"L8"[..], b"L9"]);
        }
    }

    #[test]
    fn test_delete_line_sequential_calls_shrink() {
        let mut buffer = ten_lines();
        let mut rng = SmallRng::seed_from_u64(7);
        for expected in (5..10).rev() {
            delete_random_line(&mut buffer, GuardBand::default(), &mut rng).unwrap();
            assert_eq!(buffer.len(), expected);
        }
        // Only guard lines remain
        let err = delete_random_line(&mut buffer, GuardBand::default(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GlitchError::GuardBand {
                len: 5,
                start_skip: 3,
                end_skip: 2
            }
        ));
        assert_eq!(buffer.to_bytes(), b"L0\nL1\nL2\nL8\nL9");
    }

    #[test]
    fn test_delete_line_short_buffer_fails() {
        let mut buffer = LineBuffer::from_bytes(b"only\ntwo");
        let mut rng = SmallRng::seed_from_u64(1);
        let result = delete_random_line(&mut buffer, GuardBand::default(), &mut rng);
        assert!(matches!(result, Err(GlitchError::GuardBand { len: 2, .. })));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_delete_byte_collapses_to_one_byte() {
        let guard = GuardBand::new(0, 0);
        let mut buffer = LineBuffer::from_bytes(b"abcdef");
        let mut rng = SmallRng::seed_from_u64(3);

        let kept = delete_random_byte(&mut buffer, guard, &mut rng).unwrap();

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(0), Some(&[kept][..]));
        assert!(b"abcdef".contains(&kept));
    }

    #[test]
    fn test_delete_byte_respects_guard_band() {
        let guard = GuardBand::default();
        for seed in 0..200 {
            let original = ten_lines();
            let mut buffer = original.clone();
            let mut rng = SmallRng::seed_from_u64(seed);
            delete_random_byte(&mut buffer, guard, &mut rng).unwrap();

            assert_eq!(buffer.len(), 10);
            let changed: Vec<usize> = (0..10)
                .filter(|&i| buffer.get(i) != original.get(i))
                .collect();
            // "L3" collapses to "L" or "3", always a visible change
            assert_eq!(changed.len(), 1, "seed {}", seed);
            assert!((3..8).contains(&changed[0]), "seed {}", seed);
            assert_eq!(buffer.get(changed[0]).unwrap().len(), 1);
        }
    }

    #[test]
    fn test_delete_byte_on_single_byte_segment_is_stable() {
        let guard = GuardBand::new(0, 0);
        let mut buffer = LineBuffer::from_bytes(b"x");
        let mut rng = SmallRng::seed_from_u64(9);
        assert_eq!(delete_random_byte(&mut buffer, guard, &mut rng).unwrap(), b'x');
        assert_eq!(buffer.to_bytes(), b"x");
    }

    #[test]
    fn test_delete_byte_empty_segment_fails() {
        let guard = GuardBand::new(1, 1);
        let mut buffer = LineBuffer::from_bytes(b"head\n\ntail");
        let mut rng = SmallRng::seed_from_u64(5);
        let result = delete_random_byte(&mut buffer, guard, &mut rng);
        assert!(matches!(result, Err(GlitchError::EmptySegment { index: 1 })));
        assert_eq!(buffer.to_bytes(), b"head\n\ntail");
    }

    #[test]
    fn test_same_seed_same_glitch() {
        let mut a = ten_lines();
        let mut b = ten_lines();
        let mut rng_a = SmallRng::seed_from_u64(12345);
        let mut rng_b = SmallRng::seed_from_u64(12345);
        for _ in 0..3 {
            delete_random_line(&mut a, GuardBand::default(), &mut rng_a).unwrap();
            delete_random_line(&mut b, GuardBand::default(), &mut rng_b).unwrap();
        }
        delete_random_byte(&mut a, GuardBand::new(0, 0), &mut rng_a).unwrap();
        delete_random_byte(&mut b, GuardBand::new(0, 0), &mut rng_b).unwrap();
        assert_eq!(a, b);
    }
}
