//! Deterministic random geometry for tests and benchmarks.
//!
//! Draws are reproducible and indexable: a replay token `(seed, index)` is
//! mixed into a single `StdRng`, so the same token always yields the same
//! points regardless of how many draws preceded it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::shape::Face;
use crate::space::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let key = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(key)
    }
}

/// Rectangular sampling region `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug)]
pub struct RegionCfg {
    pub width: f64,
    pub height: f64,
}

impl Default for RegionCfg {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
        }
    }
}

/// Draws `count` planar points uniformly over the region.
pub fn draw_points(count: usize, cfg: RegionCfg, tok: ReplayToken) -> Result<Vec<Point>> {
    let mut rng = tok.to_std_rng();
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(draw_point(&cfg, &mut rng)?);
    }
    Ok(points)
}

/// Draws `count` triangles with uniformly sampled vertices. Degenerate
/// (near-collinear) triangles are possible and valid, as in any raw point
/// stream.
pub fn draw_faces(count: usize, cfg: RegionCfg, tok: ReplayToken) -> Result<Vec<Face>> {
    let mut rng = tok.to_std_rng();
    let mut faces = Vec::with_capacity(count);
    for _ in 0..count {
        let p1 = draw_point(&cfg, &mut rng)?;
        let p2 = draw_point(&cfg, &mut rng)?;
        let p3 = draw_point(&cfg, &mut rng)?;
        faces.push(Face::create(p1, p2, p3)?);
    }
    Ok(faces)
}

fn draw_point(cfg: &RegionCfg, rng: &mut StdRng) -> Result<Point> {
    Point::create(&[cfg.width * rng.gen::<f64>(), cfg.height * rng.gen::<f64>()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_replays_the_same_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_points(16, RegionCfg::default(), tok).unwrap();
        let b = draw_points(16, RegionCfg::default(), tok).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_indices_draw_differently() {
        let a = draw_points(8, RegionCfg::default(), ReplayToken { seed: 42, index: 0 }).unwrap();
        let b = draw_points(8, RegionCfg::default(), ReplayToken { seed: 42, index: 1 }).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn draws_stay_inside_the_region() {
        let cfg = RegionCfg {
            width: 10.0,
            height: 5.0,
        };
        let points = draw_points(64, cfg, ReplayToken { seed: 1, index: 0 }).unwrap();
        for p in &points {
            let x = p.d(1).unwrap();
            let y = p.d(2).unwrap();
            assert!((0.0..10.0).contains(&x));
            assert!((0.0..5.0).contains(&y));
        }
    }
}
