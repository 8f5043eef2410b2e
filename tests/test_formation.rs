use invaders::config::*;
use invaders::formation::Formation;

/// Full-grid interval: f = 1.0 - 0.1 = 0.9 → 100 + 900 * 0.81 = 829 ms.
const FULL_GRID_INTERVAL: f64 = 829.0;

fn kill_all_but(formation: &mut Formation, survivors: usize) {
    for (i, alien) in formation.aliens.iter_mut().enumerate() {
        alien.alive = i < survivors;
    }
}

// ── Grid construction ─────────────────────────────────────────────────────────

#[test]
fn fresh_grid_is_full_and_alive() {
    let f = Formation::new(INITIAL_ALIEN_SPEED, 0.0);
    assert_eq!(f.aliens.len(), ALIEN_ROWS * ALIEN_COLS);
    assert!(f.aliens.iter().all(|a| a.alive));
    assert_eq!(f.living(), 55);
    assert_eq!(f.direction, 1.0);
}

#[test]
fn fresh_grid_is_centered() {
    let f = Formation::new(INITIAL_ALIEN_SPEED, 0.0);
    let left = f.aliens[0].x;
    let right = f.aliens[ALIEN_COLS - 1].x + TILE_SIZE;
    let margin_left = left;
    let margin_right = SCREEN_WIDTH - right;
    assert!((margin_left - margin_right).abs() < 0.001);
}

#[test]
fn rows_start_at_expected_y() {
    let f = Formation::new(INITIAL_ALIEN_SPEED, 0.0);
    assert_eq!(f.aliens[0].y, ALIEN_START_Y);
    assert_eq!(
        f.aliens[ALIEN_COLS].y, // first alien of second row
        ALIEN_START_Y + ALIEN_SPACING_Y
    );
}

// ── Move-interval curve ───────────────────────────────────────────────────────

#[test]
fn full_grid_interval_matches_formula() {
    let f = Formation::new(INITIAL_ALIEN_SPEED, 0.0);
    assert!((f.move_interval_ms() - FULL_GRID_INTERVAL).abs() < 0.001);
}

#[test]
fn interval_is_non_increasing_as_grid_thins() {
    let mut f = Formation::new(INITIAL_ALIEN_SPEED, 0.0);
    let mut last = f64::INFINITY;
    for survivors in [55, 44, 33, 22, 11, 5, 1, 0] {
        kill_all_but(&mut f, survivors);
        let interval = f.move_interval_ms();
        assert!(
            interval <= last,
            "interval went up at {} survivors: {} > {}",
            survivors,
            interval,
            last
        );
        last = interval;
    }
}

#[test]
fn interval_bottoms_out_at_minimum_below_ten_percent() {
    let mut f = Formation::new(INITIAL_ALIEN_SPEED, 0.0);
    // 5/55 ≈ 9.1% alive → f clamps to 0 → exactly the minimum
    kill_all_but(&mut f, 5);
    assert_eq!(f.move_interval_ms(), MIN_MOVE_INTERVAL_MS);
    kill_all_but(&mut f, 0);
    assert_eq!(f.move_interval_ms(), MIN_MOVE_INTERVAL_MS);
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[test]
fn no_step_before_interval_elapses() {
    let mut f = Formation::new(1.0, 0.0);
    let before = f.aliens[0].x;
    let step = f.tick(FULL_GRID_INTERVAL - 1.0, 560.0);
    assert_eq!(step.move_cue, None);
    assert!(!step.reached_player);
    assert_eq!(f.aliens[0].x, before);
}

#[test]
fn step_moves_living_aliens_by_speed_times_direction() {
    let mut f = Formation::new(2.0, 0.0);
    f.aliens[7].alive = false;
    let dead_x = f.aliens[7].x;
    let live_x = f.aliens[8].x;
    let step = f.tick(FULL_GRID_INTERVAL + 1.0, 560.0);
    assert!(step.move_cue.is_some());
    assert_eq!(f.aliens[8].x, live_x + 2.0);
    assert_eq!(f.aliens[7].x, dead_x); // dead aliens never move
}

#[test]
fn move_cue_cycles_round_robin() {
    let mut f = Formation::new(0.1, 0.0);
    let mut cues = Vec::new();
    let mut now = 0.0;
    for _ in 0..5 {
        now += FULL_GRID_INTERVAL + 1.0;
        cues.push(f.tick(now, 560.0).move_cue.unwrap());
    }
    assert_eq!(cues, vec![0, 1, 2, 3, 0]);
}

#[test]
fn edge_bounce_flips_direction_speeds_up_and_drops() {
    let mut f = Formation::new(1.0, 0.0);
    f.direction = -1.0;
    // Shift the whole grid so the leftmost column sits at x = 0.5
    let shift = f.aliens[0].x - 0.5;
    for alien in &mut f.aliens {
        alien.x -= shift;
    }
    let y_before: Vec<f32> = f.aliens.iter().map(|a| a.y).collect();

    let step = f.tick(FULL_GRID_INTERVAL + 1.0, 560.0);
    assert!(step.move_cue.is_some());
    assert_eq!(f.direction, 1.0);
    assert!((f.speed - BOUNCE_SPEED_FACTOR).abs() < 1e-6);
    for (alien, y0) in f.aliens.iter().zip(y_before) {
        assert_eq!(alien.y, y0 + ALIEN_DROP_DISTANCE);
    }
    // Post-drop nudge in the new direction: -0.5 + 1.02
    assert!((f.aliens[0].x - 0.52).abs() < 1e-4);
}

#[test]
fn right_edge_also_bounces() {
    let mut f = Formation::new(1.0, 0.0);
    // Shift so the rightmost column sits just shy of the edge
    let right = f.aliens[ALIEN_COLS - 1].x + TILE_SIZE;
    let shift = SCREEN_WIDTH - right - 0.5;
    for alien in &mut f.aliens {
        alien.x += shift;
    }
    f.tick(FULL_GRID_INTERVAL + 1.0, 560.0);
    assert_eq!(f.direction, -1.0);
}

#[test]
fn reaching_player_row_is_reported() {
    let mut f = Formation::new(1.0, 0.0);
    // Park one living alien so its bottom edge passes the player's y
    f.aliens[0].y = 545.0;
    let step = f.tick(FULL_GRID_INTERVAL + 1.0, 560.0);
    assert!(step.reached_player);
}

#[test]
fn high_grid_does_not_report_player_reached() {
    let mut f = Formation::new(1.0, 0.0);
    let step = f.tick(FULL_GRID_INTERVAL + 1.0, 560.0);
    assert!(!step.reached_player);
}

// ── Wave-clear detection ──────────────────────────────────────────────────────

#[test]
fn all_dead_is_detected() {
    let mut f = Formation::new(1.0, 0.0);
    assert!(!f.all_dead());
    kill_all_but(&mut f, 1);
    assert!(!f.all_dead());
    kill_all_but(&mut f, 0);
    assert!(f.all_dead());
}
