//! Build a drawable snapshot from game state
//!
//! Pure projection: nothing here mutates the session. The host draws the
//! layers in order (background, signal indicator, HUD, guides, sprites,
//! embers, overlay text).

use glam::Vec2;
use serde::Serialize;

use super::colors::{self, Rgba};
use super::shapes::{self, Arc, SIGNAL_DOT_RADIUS, Segment};
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::sim::{GamePhase, Session};

/// Number of rings in the signal indicator
pub const SIGNAL_RINGS: usize = 4;

/// Fill or outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paint {
    Fill,
    Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    Bullet,
    Enemy,
    Boss,
}

/// One entity ready to draw
#[derive(Debug, Clone, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub rotation: f32,
    pub radius: f32,
    pub color: Rgba,
    pub paint: Paint,
    pub line_width: f32,
    /// Closed polygon in playfield coordinates
    pub outline: Vec<Vec2>,
}

/// One explosion particle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmberSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// Ring of the signal indicator with its current color
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignalRing {
    pub arc: Arc,
    pub lit: bool,
    pub color: Rgba,
}

/// The strength indicator painted over the background
#[derive(Debug, Clone, Serialize)]
pub struct SignalIndicator {
    /// Innermost first; ring N (1-based) is lit while strength >= N
    pub rings: Vec<SignalRing>,
    pub dot_center: Vec2,
    pub dot_radius: f32,
    pub dot_lit: bool,
    pub dot_color: Rgba,
}

impl SignalIndicator {
    pub fn new(center: Vec2, strength: f32) -> Self {
        let rings = shapes::signal_rings(center, SIGNAL_RINGS)
            .into_iter()
            .enumerate()
            .map(|(i, arc)| {
                let lit = strength >= (i + 1) as f32;
                SignalRing {
                    arc,
                    lit,
                    color: if lit { colors::SIGNAL_LIT } else { colors::SIGNAL_DIM },
                }
            })
            .collect();
        let dot_lit = strength > 0.0;
        Self {
            rings,
            dot_center: center,
            dot_radius: SIGNAL_DOT_RADIUS,
            dot_lit,
            dot_color: if dot_lit { colors::SIGNAL_LIT } else { colors::SIGNAL_DIM },
        }
    }

    /// How many rings are lit
    pub fn bars(&self) -> usize {
        self.rings.iter().filter(|r| r.lit).count()
    }
}

/// A line of centered text
#[derive(Debug, Clone, Serialize)]
pub struct Text {
    pub text: String,
    pub pos: Vec2,
    /// Font size in pixels (monospace)
    pub size: f32,
    pub color: Rgba,
}

impl Text {
    fn new(text: impl Into<String>, pos: Vec2, size: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            color: colors::TEXT,
        }
    }
}

/// Which screen is up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Splash,
    Playing,
    GameOver,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub screen: Screen,
    pub width: f32,
    pub height: f32,
    /// Canvas hue rotation for the current level (degrees)
    pub hue: f32,
    pub background: Rgba,
    pub signal: SignalIndicator,
    /// Score readout, absent on the splash screen
    pub hud: Option<Text>,
    pub guides: Vec<Segment>,
    pub guide_color: Rgba,
    pub sprites: Vec<Sprite>,
    pub embers: Vec<EmberSprite>,
    pub overlay: Vec<Text>,
    /// Whether the start/restart control is visible
    pub show_start: bool,
}

/// Project the current state into a snapshot
pub fn build_snapshot(
    phase: GamePhase,
    session: &Session,
    scores: &HighScores,
    settings: &Settings,
) -> RenderSnapshot {
    let playfield = session.playfield;
    let center = playfield.center();
    let mut snapshot = RenderSnapshot {
        screen: match phase {
            GamePhase::Idle => Screen::Splash,
            GamePhase::Running => Screen::Playing,
            GamePhase::Ended => Screen::GameOver,
        },
        width: playfield.width,
        height: playfield.height,
        hue: session.hue(),
        background: colors::BACKGROUND,
        signal: SignalIndicator::new(center, session.player.strength),
        hud: None,
        guides: Vec::new(),
        guide_color: colors::PLAYER_GUIDE,
        sprites: Vec::new(),
        embers: Vec::new(),
        overlay: Vec::new(),
        show_start: phase != GamePhase::Running,
    };

    match phase {
        GamePhase::Idle => snapshot.overlay = splash_text(center),
        GamePhase::Running => add_world(&mut snapshot, session, settings),
        GamePhase::Ended => {
            // The last frame stays up under the summary
            add_world(&mut snapshot, session, settings);
            snapshot.overlay = end_text(center, scores);
        }
    }

    snapshot
}

fn add_world(snapshot: &mut RenderSnapshot, session: &Session, settings: &Settings) {
    let flash = settings.effective_hit_flash();

    snapshot.hud = Some(Text::new(
        format!("{} pts", session.player.score),
        Vec2::new(snapshot.width - 50.0, snapshot.height - 20.0),
        12.0,
    ));

    for bullet in &session.bullets {
        let body = &bullet.body;
        snapshot.sprites.push(Sprite {
            kind: SpriteKind::Bullet,
            pos: body.pos,
            rotation: body.rotation,
            radius: body.radius,
            color: colors::BULLET,
            paint: Paint::Stroke,
            line_width: 1.0,
            outline: shapes::arrowhead(body.pos, body.radius, body.rotation),
        });
    }

    for enemy in &session.enemies {
        let body = &enemy.body;
        // Struck enemies hollow out until they burst next tick
        let paint = if flash && enemy.is_hit {
            Paint::Stroke
        } else {
            Paint::Fill
        };
        snapshot.sprites.push(Sprite {
            kind: SpriteKind::Enemy,
            pos: body.pos,
            rotation: body.rotation,
            radius: body.radius,
            color: colors::ENEMY,
            paint,
            line_width: 1.0,
            outline: shapes::dart(body.pos, body.radius, body.rotation),
        });
    }

    let player = &session.player;
    let body = &player.body;
    if settings.crosshair {
        snapshot.guides = shapes::crosshair(
            body.pos,
            body.radius,
            snapshot.width,
            snapshot.height,
        )
        .to_vec();
    }
    snapshot.sprites.push(Sprite {
        kind: SpriteKind::Player,
        pos: body.pos,
        rotation: body.rotation,
        radius: body.radius,
        color: colors::PLAYER,
        paint: if flash && player.hit_flash {
            Paint::Fill
        } else {
            Paint::Stroke
        },
        line_width: 2.5,
        outline: shapes::arrowhead(body.pos, body.radius * 0.75, body.rotation),
    });

    if let Some(boss) = &session.boss {
        let body = &boss.body;
        snapshot.sprites.push(Sprite {
            kind: SpriteKind::Boss,
            pos: body.pos,
            rotation: body.rotation,
            radius: body.radius,
            color: colors::boss(body.pos.x),
            paint: if flash && boss.hit_flash {
                Paint::Fill
            } else {
                Paint::Stroke
            },
            line_width: 3.0,
            outline: shapes::arrowhead(body.pos, body.radius, body.rotation),
        });
    }

    for explosion in &session.explosions {
        let color = colors::ember(explosion.alpha);
        snapshot
            .embers
            .extend(explosion.embers.iter().map(|ember| EmberSprite {
                pos: ember.pos,
                radius: ember.radius,
                color,
            }));
    }
}

fn splash_text(center: Vec2) -> Vec<Text> {
    vec![
        Text::new("Connection Defender", center + Vec2::new(0.0, -80.0), 45.0),
        Text::new("W,A,S,D or Arrow Keys to move.", center, 25.0),
        Text::new("Mouse to aim.", center + Vec2::new(0.0, 40.0), 25.0),
        Text::new("Click to shoot.", center + Vec2::new(0.0, 80.0), 25.0),
    ]
}

fn end_text(center: Vec2, scores: &HighScores) -> Vec<Text> {
    let mut lines = vec![
        Text::new("Game Over!", center + Vec2::new(0.0, -140.0), 45.0),
        Text::new(
            "Connection lost! You are now offline...",
            center + Vec2::new(0.0, -100.0),
            20.0,
        ),
        Text::new("High Scores:", center + Vec2::new(0.0, -60.0), 20.0),
    ];
    lines.extend(scores.entries.iter().enumerate().map(|(i, score)| {
        let offset = -30.0 + 30.0 * i as f32;
        Text::new(format!("{score} pts"), center + Vec2::new(0.0, offset), 20.0)
    }));
    lines
}

impl RenderSnapshot {
    /// JSON for hosts that draw outside Rust
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
