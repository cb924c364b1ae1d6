//! A game in progress: the board plus whose turn it is.
//!
//! The rules engine knows nothing about turns. [`GameState`] is the thin
//! layer that alternates sides, skips a player who has no legal move, and
//! notices when neither side can move.

use tracing::{debug, info};

use crate::ai::{RandomSource, Searcher};
use crate::board::{Board, Move, Player};
use crate::error::GameError;
use crate::rules::{apply_move, has_valid_move, is_game_over, winner};

/// Board, side to move and a few counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
    /// Discs placed so far
    moves_played: usize,
    /// Turns skipped because the side to move had no legal move
    passes: usize,
    last: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard opening, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Resume from an arbitrary position.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            moves_played: 0,
            passes: 0,
            last: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last
    }

    pub fn is_over(&self) -> bool {
        is_game_over(&self.board)
    }

    /// Disc counts as `(black, white)`.
    pub fn score(&self) -> (usize, usize) {
        (self.board.count(Player::Black), self.board.count(Player::White))
    }

    /// The leader once the game is over; `None` while playing or on a tie.
    pub fn winner(&self) -> Option<Player> {
        if self.is_over() {
            winner(&self.board)
        } else {
            None
        }
    }

    /// Play `(x, y)` for the side to move.
    ///
    /// # Errors
    /// - [`GameError::GameOver`] once neither side can move
    /// - [`GameError::Move`] if the move is illegal
    pub fn play(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.board = apply_move(&self.board, x, y, self.to_move)?;
        self.moves_played += 1;
        self.last = Some(Move::new(x, y));
        self.advance_turn();
        Ok(())
    }

    /// Like [`GameState::play`], but checks that `player` is the side to move.
    pub fn play_as(&mut self, player: Player, x: usize, y: usize) -> Result<(), GameError> {
        if player != self.to_move {
            return Err(GameError::WrongPlayer(player));
        }
        self.play(x, y)
    }

    /// Hand the turn to the opponent. Only allowed without a legal move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if has_valid_move(&self.board, self.to_move) {
            return Err(GameError::PassNotAllowed(self.to_move));
        }
        debug!(player = self.to_move.name(), "pass");
        self.passes += 1;
        self.last = None;
        self.to_move = self.to_move.other();
        Ok(())
    }

    /// Let `searcher` move for the side to move. Returns the move played,
    /// or `None` if the side had to pass.
    pub fn play_ai<R: RandomSource>(
        &mut self,
        searcher: &mut Searcher<R>,
    ) -> Result<Option<Move>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        match searcher.search(&self.board, self.to_move).best_move {
            Some(mv) => {
                self.play(mv.x, mv.y)?;
                Ok(Some(mv))
            }
            None => {
                self.pass()?;
                Ok(None)
            }
        }
    }

    /// Give the turn to the opponent unless they have nothing to play.
    fn advance_turn(&mut self) {
        let next = self.to_move.other();
        if has_valid_move(&self.board, next) {
            self.to_move = next;
        } else if has_valid_move(&self.board, self.to_move) {
            debug!(player = next.name(), "no legal move, turn skipped");
            self.passes += 1;
        } else {
            let (black, white) = self.score();
            info!(black, white, "game over");
            self.to_move = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Level;
    use crate::constants::MAX_GAME_LEN;
    use crate::error::MoveError;

    fn one_sided() -> GameState {
        let board: Board = "XO......
                            ........
                            XO......
                            ........
                            ........
                            ........
                            ........
                            ........"
            .parse()
            .expect("test board should parse");
        GameState::from_board(board, Player::Black)
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.to_move(), Player::Black);
        assert_eq!(game.score(), (2, 2));
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_play_alternates() {
        let mut game = GameState::new();
        game.play(2, 3).expect("c4 is legal");
        assert_eq!(game.to_move(), Player::White);
        assert_eq!(game.score(), (4, 1));
        assert_eq!(game.last_move(), Some(Move::new(2, 3)));
        assert_eq!(game.moves_played(), 1);
    }

    #[test]
    fn test_illegal_play_leaves_state() {
        let mut game = GameState::new();
        let before = game.clone();
        assert_eq!(
            game.play(0, 0),
            Err(GameError::Move(MoveError::NoCapture(Move::new(0, 0))))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_wrong_player() {
        let mut game = GameState::new();
        assert_eq!(
            game.play_as(Player::White, 4, 2),
            Err(GameError::WrongPlayer(Player::White))
        );
        assert!(game.play_as(Player::Black, 3, 2).is_ok());
    }

    #[test]
    fn test_pass_not_allowed_with_moves() {
        let mut game = GameState::new();
        assert_eq!(game.pass(), Err(GameError::PassNotAllowed(Player::Black)));
    }

    #[test]
    fn test_forced_pass_keeps_turn() {
        let mut game = one_sided();
        game.play(2, 0).expect("c1 is legal");
        assert_eq!(game.to_move(), Player::Black);
        assert_eq!(game.passes(), 1);

        game.play(2, 2).expect("c3 is legal");
        assert!(game.is_over());
        assert_eq!(game.score(), (6, 0));
        assert_eq!(game.winner(), Some(Player::Black));
        assert_eq!(game.play(3, 3), Err(GameError::GameOver));
        assert_eq!(game.pass(), Err(GameError::GameOver));
    }

    #[test]
    fn test_ai_game_runs_to_completion() {
        let mut game = GameState::new();
        let mut black = Searcher::with_seed(Level::Greedy, 3);
        let mut white = Searcher::with_seed(Level::Random, 3);
        let mut plies = 0;
        while !game.is_over() {
            let searcher = match game.to_move() {
                Player::Black => &mut black,
                Player::White => &mut white,
            };
            game.play_ai(searcher).expect("ai plays legal moves");
            plies += 1;
            assert!(plies <= 2 * MAX_GAME_LEN, "game did not terminate");
        }
        let (b, w) = game.score();
        assert!(b + w <= 64);
        assert_eq!(game.moves_played(), b + w - 4);
    }
}
