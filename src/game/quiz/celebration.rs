use rand::Rng;
use std::time::Duration;

use crate::game::quiz::settings::Viewport;

const CONFETTI_GLYPHS: [char; 6] = ['*', '+', 'o', '~', '.', '#'];

// One piece of confetti for this many cells of the viewport
const CONFETTI_SPARSENESS: usize = 8;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Piece {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Confetti {
    pub viewport: Viewport,
    pub pieces: Vec<Piece>,
}

impl Confetti {
    pub fn scatter<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        let viewport = viewport.clamped();
        if viewport.width == 0 || viewport.height == 0 {
            return Confetti {
                viewport,
                pieces: Vec::new(),
            };
        }
        let count = (viewport.width as usize * viewport.height as usize) / CONFETTI_SPARSENESS;
        let pieces = (0..count)
            .map(|_| Piece {
                x: rng.gen_range(0, viewport.width),
                y: rng.gen_range(0, viewport.height),
                glyph: CONFETTI_GLYPHS[rng.gen_range(0, CONFETTI_GLYPHS.len())],
            })
            .collect();
        Confetti { viewport, pieces }
    }

    pub fn rows(&self) -> Vec<String> {
        let mut grid =
            vec![vec![' '; self.viewport.width as usize]; self.viewport.height as usize];
        for piece in &self.pieces {
            grid[piece.y as usize][piece.x as usize] = piece.glyph;
        }
        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
            .collect()
    }
}

/// Countdown until the confetti is cleared.
#[derive(Debug)]
pub struct Celebration {
    time_elapsed: Duration,
    time_to_wait: Duration,
}

impl Celebration {
    pub fn new(duration: Duration) -> Self {
        Celebration {
            time_elapsed: Duration::default(),
            time_to_wait: duration,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    pub fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_to_wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn confetti_stays_inside_viewport() {
        let viewport = Viewport {
            width: 40,
            height: 10,
        };
        let confetti = Confetti::scatter(viewport, &mut StdRng::seed_from_u64(99));
        assert_eq!(confetti.pieces.len(), 50);
        assert!(confetti
            .pieces
            .iter()
            .all(|p| p.x < viewport.width && p.y < viewport.height));
    }

    #[test]
    fn renders_one_row_per_line() {
        let viewport = Viewport {
            width: 16,
            height: 4,
        };
        let confetti = Confetti::scatter(viewport, &mut StdRng::seed_from_u64(7));
        let rows = confetti.rows();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.chars().count() <= 16));
    }

    #[test]
    fn huge_viewport_is_capped() {
        let viewport = Viewport {
            width: u16::MAX,
            height: u16::MAX,
        };
        let confetti = Confetti::scatter(viewport, &mut StdRng::seed_from_u64(3));
        assert_eq!(confetti.viewport.width, Viewport::MAX_WIDTH);
        assert_eq!(confetti.viewport.height, Viewport::MAX_HEIGHT);
        assert_eq!(
            confetti.pieces.len(),
            Viewport::MAX_WIDTH as usize * Viewport::MAX_HEIGHT as usize / CONFETTI_SPARSENESS
        );
        assert_eq!(confetti.rows().len(), Viewport::MAX_HEIGHT as usize);
    }

    #[test]
    fn empty_viewport_has_no_confetti() {
        let viewport = Viewport {
            width: 0,
            height: 5,
        };
        let confetti = Confetti::scatter(viewport, &mut StdRng::seed_from_u64(1));
        assert!(confetti.pieces.is_empty());
    }

    #[test]
    fn celebration_ends_after_duration() {
        let mut celebration = Celebration::new(Duration::from_secs(30));
        assert!(!celebration.is_over());
        celebration.tick(Duration::from_secs(29));
        assert!(!celebration.is_over());
        celebration.tick(Duration::from_secs(1));
        assert!(celebration.is_over());
    }
}
