use connect4_core::logic::board::{Board, Player, HEIGHT, WIDTH};
use connect4_core::logic::game::{GameState, GameStatus};
use connect4_core::logic::history::{format_history, parse_history, Move};
use connect4_core::GameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays random legal moves until the game ends or `max_moves` is reached.
fn random_game(rng: &mut StdRng, max_moves: usize) -> (Vec<Move>, Board) {
    let mut board = Board::new();
    let mut moves = Vec::new();
    while moves.len() < max_moves && !board.is_terminal() {
        let legal: Vec<usize> = board.legal_columns().iter().copied().collect();
        let Some(&column) = legal.choose(rng) else {
            break;
        };
        let player = board.to_move();
        board = board.apply(column, player).unwrap();
        moves.push(Move { player, column });
    }
    (moves, board)
}

#[test]
fn replayed_heights_match_column_counts() {
    let mut rng = StdRng::seed_from_u64(0xC4);
    for _ in 0..500 {
        let (moves, board) = random_game(&mut rng, WIDTH * HEIGHT);
        let history = format_history(&moves);

        let parsed = parse_history(&history).unwrap();
        assert_eq!(parsed, moves);

        let state = GameState::from_history(&history).unwrap();
        assert_eq!(state.board, board);
        for col in 0..WIDTH {
            let count = parsed.iter().filter(|m| m.column == col).count();
            assert_eq!(state.board.height(col), Some(count), "history {history}");
        }
        assert_eq!(state.board.mask(Player::Blue) & state.board.mask(Player::Red), 0);
        let next = if moves.len() % 2 == 0 {
            Player::Blue
        } else {
            Player::Red
        };
        assert_eq!(state.turn(), next);
    }
}

#[test]
fn any_token_after_a_win_is_rejected() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut checked = 0;
    while checked < 100 {
        let (moves, board) = random_game(&mut rng, WIDTH * HEIGHT);
        let Some(winner) = board.winner() else {
            continue;
        };
        let state = GameState::from_history(&format_history(&moves)).unwrap();
        assert_eq!(state.status, GameStatus::Won(winner));

        let Some(&column) = board.legal_columns().iter().next() else {
            continue;
        };
        let extra = Move {
            player: board.to_move(),
            column,
        };
        let history = format!("{}{extra}", format_history(&moves));
        assert_eq!(
            GameState::from_history(&history),
            Err(GameError::ContinuationAfterWin { ply: moves.len() })
        );
        checked += 1;
    }
}

/// Builds a board where `player` owns exactly `cells` and every square below
/// them is filled by the opponent.
fn board_with_line(player: Player, cells: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for col in 0..WIDTH {
        let Some(top) = cells.iter().filter(|c| c.0 == col).map(|c| c.1).max() else {
            continue;
        };
        for row in 0..=top {
            let owner = if cells.contains(&(col, row)) {
                player
            } else {
                player.opponent()
            };
            board = board.apply(col, owner).unwrap();
        }
    }
    board
}

fn all_lines() -> Vec<[(usize, usize); 4]> {
    let mut lines = Vec::new();
    let steps: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
    for (dc, dr) in steps {
        for col in 0..WIDTH as isize {
            for row in 0..HEIGHT as isize {
                let cells: Vec<(isize, isize)> =
                    (0..4).map(|i| (col + dc * i, row + dr * i)).collect();
                let in_bounds = cells.iter().all(|&(c, r)| {
                    (0..WIDTH as isize).contains(&c) && (0..HEIGHT as isize).contains(&r)
                });
                if in_bounds {
                    let mut line = [(0, 0); 4];
                    for (slot, &(c, r)) in line.iter_mut().zip(&cells) {
                        *slot = (c as usize, r as usize);
                    }
                    lines.push(line);
                }
            }
        }
    }
    lines
}

#[test]
fn every_line_of_four_is_a_win_in_every_direction() {
    let lines = all_lines();
    assert_eq!(lines.len(), 69);
    for player in [Player::Blue, Player::Red] {
        for line in &lines {
            let board = board_with_line(player, line);
            assert!(board.is_win(player), "{line:?} not a win\n{board}");

            let mirrored: Vec<(usize, usize)> =
                line.iter().map(|&(c, r)| (WIDTH - 1 - c, r)).collect();
            let board = board_with_line(player, &mirrored);
            assert!(board.is_win(player), "{mirrored:?} not a win\n{board}");

            // Three of the four cells are never enough.
            let board = board_with_line(player, &line[..3]);
            assert!(!board.is_win(player), "{line:?} minus one cell is a win\n{board}");
        }
    }
}
