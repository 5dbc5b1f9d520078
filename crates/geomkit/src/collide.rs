//! Batch pairwise triangle-intersection counting.
//!
//! The O(n^2) pairwise sweep partitions the index space by first index and
//! runs each shard on an independent rayon worker with a local accumulator;
//! faces are read-only after construction, so no synchronization is needed.
//! Callers wrapping the batch in a cancellable task own cancellation.

use rayon::prelude::*;

use crate::shape::Face;

/// Number of intersecting unordered pairs, sharded across threads.
pub fn count_intersections(faces: &[Face]) -> usize {
    faces
        .par_iter()
        .enumerate()
        .map(|(i, face)| {
            faces[i + 1..]
                .iter()
                .filter(|other| face.intersects(other))
                .count()
        })
        .sum()
}

/// Sequential baseline for tiny inputs and comparison runs.
pub fn count_intersections_seq(faces: &[Face]) -> usize {
    let mut count = 0;
    for (i, face) in faces.iter().enumerate() {
        for other in &faces[i + 1..] {
            if face.intersects(other) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{draw_faces, RegionCfg, ReplayToken};
    use crate::space::Point;

    fn face(coords: [[f64; 2]; 3]) -> Face {
        Face::create(
            Point::create(&coords[0]).unwrap(),
            Point::create(&coords[1]).unwrap(),
            Point::create(&coords[2]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn counts_handcrafted_pairs() {
        // a and b overlap; c sits far away from both.
        let a = face([[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]);
        let b = face([[1.0, 1.0], [5.0, 1.0], [1.0, 5.0]]);
        let c = face([[100.0, 100.0], [104.0, 100.0], [100.0, 104.0]]);
        assert_eq!(count_intersections_seq(&[a.clone(), b.clone(), c.clone()]), 1);
        assert_eq!(count_intersections(&[a, b, c]), 1);
    }

    #[test]
    fn parallel_and_sequential_counts_agree() {
        let faces = draw_faces(
            60,
            RegionCfg::default(),
            ReplayToken { seed: 3, index: 9 },
        )
        .unwrap();
        assert_eq!(count_intersections(&faces), count_intersections_seq(&faces));
    }

    #[test]
    fn empty_and_singleton_inputs_have_no_pairs() {
        assert_eq!(count_intersections(&[]), 0);
        let a = face([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(count_intersections(&[a]), 0);
    }
}
