//! Hero background particle field.
//!
//! A handful of slow particles bouncing inside the hero, linked to their
//! next few neighbours when close enough. Rendering is up to the caller.

use std::time::Duration;

use rand::Rng;

/// Animation frame period (20 FPS).
pub const PARTICLE_FRAME: Duration = Duration::from_millis(50);

const MAX_PARTICLES: usize = 30;
const PIXELS_PER_PARTICLE: f64 = 40.0;
const LINK_DISTANCE: f64 = 100.0;
/// Each particle only considers this many followers for links.
const LINK_NEIGHBOURS: usize = 2;

pub const PALETTE: [&str; 4] = ["#60a5fa", "#34d399", "#a78bfa", "#f472b6"];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: &'static str,
}

/// Line between two nearby particles.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Link {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, &mut rand::rng())
    }

    pub fn with_rng<R: Rng>(width: f64, height: f64, rng: &mut R) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let count = particle_count(width);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..=width),
                y: rng.random_range(0.0..=height),
                radius: rng.random_range(0.5..2.5),
                vx: rng.random_range(-0.5..0.5),
                vy: rng.random_range(-0.5..0.5),
                color: PALETTE[rng.random_range(0..PALETTE.len())],
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Move every particle one frame, bouncing off the edges.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x > w || p.x < 0.0 {
                p.vx = -p.vx;
            }
            if p.y > h || p.y < 0.0 {
                p.vy = -p.vy;
            }
        }
    }

    /// Segments between each particle and its next few neighbours.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in self.particles.iter().skip(i + 1).take(LINK_NEIGHBOURS) {
                let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        x1: a.x,
                        y1: a.y,
                        x2: b.x,
                        y2: b.y,
                        opacity: 1.0 - distance / LINK_DISTANCE,
                    });
                }
            }
        }
        links
    }
}

fn particle_count(width: f64) -> usize {
    ((width / PIXELS_PER_PARTICLE).floor() as usize).min(MAX_PARTICLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            radius: 1.0,
            vx,
            vy,
            color: PALETTE[0],
        }
    }

    #[test]
    fn count_scales_with_width_and_caps() {
        assert_eq!(ParticleField::new(400.0, 300.0).particles().len(), 10);
        assert_eq!(ParticleField::new(4000.0, 300.0).particles().len(), 30);
        assert!(ParticleField::new(0.0, 0.0).particles().is_empty());
    }

    #[test]
    fn particles_start_inside_field() {
        let field = ParticleField::new(800.0, 600.0);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn step_bounces_off_edges() {
        let mut field =
            ParticleField::from_particles(100.0, 100.0, vec![particle(99.8, 50.0, 0.5, 0.0)]);
        field.step();
        assert!(field.particles()[0].vx < 0.0);
        field.step();
        assert!(field.particles()[0].x < 100.5);
    }

    #[test]
    fn links_only_between_close_neighbours() {
        let field = ParticleField::from_particles(
            500.0,
            500.0,
            vec![
                particle(0.0, 0.0, 0.0, 0.0),
                particle(50.0, 0.0, 0.0, 0.0),
                particle(400.0, 400.0, 0.0, 0.0),
                particle(10.0, 0.0, 0.0, 0.0),
            ],
        );
        let links = field.links();
        // 0-1 close, 0-2 far; 1-3 close (40px); 2-3 far. 0-3 is beyond the neighbour window.
        assert_eq!(links.len(), 2);
        assert!((links[0].opacity - 0.5).abs() < 1e-9);
        assert!((links[1].opacity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn each_particle_links_to_two_followers() {
        let row = (0..5).map(|i| particle(i as f64 * 5.0, 0.0, 0.0, 0.0)).collect();
        let field = ParticleField::from_particles(500.0, 500.0, row);
        // All within range: 2 + 2 + 2 + 1 + 0
        assert_eq!(field.links().len(), 7);
    }
}
