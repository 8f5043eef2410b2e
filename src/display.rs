//! Rendering layer - all terminal I/O lives here.
//!
//! The simulation works in an 800x600 game-pixel space; this module scales
//! that onto the available terminal cells and paints each entity as a filled
//! rectangle.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use invaders::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use invaders::entities::Tint;
use invaders::geometry::Rect;
use invaders::session::{Phase, Session};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::LimeGreen => Color::Green,
        Tint::Yellow => Color::Yellow,
        Tint::Red => Color::Red,
        Tint::Pink => Color::Magenta,
        Tint::Cyan => Color::Cyan,
        Tint::LightCoral => Color::DarkRed,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps game pixels onto terminal cells.  Row 0 is the HUD and the last row
/// is the controls hint; the play field gets everything in between.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    /// Cell span covered by a game-pixel rectangle: (col0, row0, col1, row1),
    /// end-exclusive, clamped to the play field.  A rectangle sitting on the
    /// far edge (an alien bullet is still rendered at exactly y = screen
    /// height) must land on the last cell, not one past it.
    fn cells(&self, rect: &Rect) -> (u16, u16, u16, u16) {
        let sx = self.cols as f32 / SCREEN_WIDTH;
        let sy = self.play_rows() as f32 / SCREEN_HEIGHT;
        let c0 = ((rect.x * sx).floor().max(0.0) as u16).min(self.cols.saturating_sub(1));
        let c1 = ((rect.right() * sx).ceil() as u16).min(self.cols).max(c0 + 1);
        let r0 = ((rect.y * sy).floor().max(0.0) as u16).min(self.play_rows() - 1);
        let r1 = ((rect.bottom() * sy).ceil() as u16)
            .min(self.play_rows())
            .max(r0 + 1);
        (c0, r0, c1, r1)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: clear, then player, player bullets, alien
/// bullets, aliens, HUD, and whichever overlay the phase calls for.
pub fn render<W: Write>(out: &mut W, state: &Session, vp: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if state.phase != Phase::NotStarted {
        if state.phase != Phase::GameOver {
            fill_rect(out, vp, &state.player.rect(), tint_color(Tint::LimeGreen))?;
        }
        for bullet in &state.bullets {
            fill_rect(out, vp, &bullet.rect(), tint_color(bullet.tint))?;
        }
        for bullet in &state.alien_bullets {
            fill_rect(out, vp, &bullet.rect(), tint_color(bullet.tint))?;
        }
        for alien in state.formation.aliens.iter().filter(|a| a.alive) {
            fill_rect(out, vp, &alien.rect(), tint_color(alien.tint))?;
        }
    }

    draw_hud(out, state, vp)?;
    draw_controls_hint(out, vp)?;

    match state.phase {
        Phase::NotStarted => draw_start_screen(out, vp)?,
        Phase::WaveCleared => draw_wave_cleared(out, vp)?,
        Phase::GameOver => draw_game_over(out, state, vp)?,
        Phase::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// The one primitive the simulation's draw model needs: a filled rectangle
/// at game coordinates in a solid color.
fn fill_rect<W: Write>(
    out: &mut W,
    vp: Viewport,
    rect: &Rect,
    color: Color,
) -> std::io::Result<()> {
    let (c0, r0, c1, r1) = vp.cells(rect);
    out.queue(style::SetForegroundColor(color))?;
    let run: String = "█".repeat((c1 - c0) as usize);
    for row in r0..r1 {
        // Play field starts one row below the HUD
        out.queue(cursor::MoveTo(c0, row + 1))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &Session, vp: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;

    let hearts: String = "♥".repeat(state.lives as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = vp.cols.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered_lines<W: Write>(
    out: &mut W,
    vp: Viewport,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_start_screen<W: Write>(out: &mut W, vp: Viewport) -> std::io::Result<()> {
    draw_centered_lines(
        out,
        vp,
        &[
            ("★  SPACE  INVADERS  ★", Color::Cyan),
            ("", Color::White),
            ("ENTER - Start Game", Color::White),
            ("Q - Quit", Color::DarkGrey),
        ],
    )
}

fn draw_wave_cleared<W: Write>(out: &mut W, vp: Viewport) -> std::io::Result<()> {
    draw_centered_lines(
        out,
        vp,
        &[("WAVE CLEARED!  Prepare for the next!", Color::Green)],
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &Session, vp: Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    draw_centered_lines(
        out,
        vp,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (&score_line, Color::Yellow),
            ("R - Play Again  Q - Quit", Color::White),
        ],
    )
}
