use macroquad::prelude::*;

use snake_classic::{BOARD_SIZE, CELL_SIZE, Cell, Direction, SnakeGame, Ticker};

const TICK_SECONDS: f64 = 0.1;
const START_DELAY_SECONDS: f64 = 1.0;
const HUD_HEIGHT: i32 = 48;

// Classic palette
const HUD_BG: Color = Color::new(0.05, 0.06, 0.05, 1.0);
const PLAYFIELD_BG: Color = Color::new(0.09, 0.11, 0.09, 1.0);
const HEAD_COLOR: Color = Color::new(0.55, 0.95, 0.55, 1.0);
const BODY_COLOR: Color = Color::new(0.2, 0.7, 0.25, 1.0);
const FOOD_COLOR: Color = Color::new(0.9, 0.2, 0.2, 1.0);
const TITLE_COLOR: Color = Color::new(0.64, 1.0, 0.64, 1.0);
const TEXT_COLOR: Color = Color::new(0.85, 0.9, 0.85, 1.0);
const DIM_TEXT: Color = Color::new(0.5, 0.6, 0.5, 1.0);

enum Screen {
    Menu,
    Starting { until: f64 },
    Playing { ticker: Ticker },
    GameOver,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: BOARD_SIZE,
        window_height: BOARD_SIZE + HUD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn poll_direction_keys(game: &mut SnakeGame) {
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        game.set_heading(Direction::Up);
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        game.set_heading(Direction::Down);
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        game.set_heading(Direction::Left);
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        game.set_heading(Direction::Right);
    }
}

fn draw_playfield() {
    draw_rectangle(
        0.0,
        HUD_HEIGHT as f32,
        BOARD_SIZE as f32,
        BOARD_SIZE as f32,
        PLAYFIELD_BG,
    );
}

fn draw_cell(cell: Cell, color: Color) {
    // A dead head can sit outside the board; never paint it over the HUD.
    if cell.x < 0 || cell.x >= BOARD_SIZE || cell.y < 0 || cell.y >= BOARD_SIZE {
        return;
    }
    draw_rectangle(
        cell.x as f32,
        (cell.y + HUD_HEIGHT) as f32,
        CELL_SIZE as f32,
        CELL_SIZE as f32,
        color,
    );
}

fn draw_board(game: &SnakeGame) {
    draw_playfield();
    draw_cell(game.food(), FOOD_COLOR);
    for (i, part) in game.snake().iter().enumerate() {
        let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
        draw_cell(*part, color);
    }
}

fn draw_hud(game: &SnakeGame) {
    draw_rectangle(0.0, 0.0, screen_width(), HUD_HEIGHT as f32, HUD_BG);
    draw_text(&format!("Score: {}", game.score()), 12.0, 32.0, 28.0, TEXT_COLOR);
    let best = format!("High Score: {}", game.high_score());
    let m = measure_text(&best, None, 28, 1.0);
    draw_text(&best, screen_width() - m.width - 12.0, 32.0, 28.0, TEXT_COLOR);
}

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, font_size as f32, color);
}

#[macroquad::main(window_conf)]
async fn main() {
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let mut game = SnakeGame::new();
    let mut screen = Screen::Menu;

    loop {
        let now = get_time();

        if is_key_pressed(KeyCode::Q) {
            break;
        }

        clear_background(BLACK);
        draw_hud(&game);

        let mut next_screen: Option<Screen> = None;
        match &mut screen {
            Screen::Menu => {
                draw_playfield();
                let mid = (HUD_HEIGHT + BOARD_SIZE / 2) as f32;
                draw_centered("SNAKE", mid - 40.0, 48, TITLE_COLOR);
                draw_centered("Enter: play    Q: quit", mid + 12.0, 24, TEXT_COLOR);
                if is_key_pressed(KeyCode::Enter) {
                    next_screen = Some(Screen::Starting {
                        until: now + START_DELAY_SECONDS,
                    });
                }
            }

            Screen::Starting { until } => {
                // Grace period between the start request and the first tick;
                // the start prompt stays hidden throughout.
                draw_playfield();
                draw_centered(
                    "Get ready...",
                    (HUD_HEIGHT + BOARD_SIZE / 2) as f32,
                    28,
                    DIM_TEXT,
                );
                if now >= *until {
                    game.start();
                    info!("round started");
                    next_screen = Some(Screen::Playing {
                        ticker: Ticker::new(TICK_SECONDS, now),
                    });
                }
            }

            Screen::Playing { ticker } => {
                poll_direction_keys(&mut game);
                if ticker.due(now) {
                    game.step();
                }
                draw_board(&game);
                if !game.is_running() {
                    info!(
                        "game over: score {} (best {})",
                        game.score(),
                        game.high_score()
                    );
                    next_screen = Some(Screen::GameOver);
                }
            }

            Screen::GameOver => {
                draw_board(&game);
                draw_rectangle(
                    0.0,
                    HUD_HEIGHT as f32,
                    BOARD_SIZE as f32,
                    BOARD_SIZE as f32,
                    Color::new(0.0, 0.0, 0.0, 0.5),
                );
                let mid = (HUD_HEIGHT + BOARD_SIZE / 2) as f32;
                draw_centered("GAME OVER", mid - 40.0, 48, TITLE_COLOR);
                draw_centered(&format!("Score: {}", game.score()), mid + 12.0, 28, TEXT_COLOR);
                draw_centered("Enter: play again    Q: quit", mid + 48.0, 24, DIM_TEXT);
                if is_key_pressed(KeyCode::Enter) {
                    next_screen = Some(Screen::Starting {
                        until: now + START_DELAY_SECONDS,
                    });
                }
            }
        }

        if let Some(ns) = next_screen {
            screen = ns;
        }

        next_frame().await;
    }
}
