//! Game orchestration: turn order, legality, promotion and results.
//!
//! [`Game`] owns one [`Board`] and one [`GameState`] and is the only place
//! they change during play. Legality is checked by playing candidate moves on
//! copies, so a query never disturbs the live position.

use crate::movegen::{self, MoveEffects, MoveList};
use crate::{Board, CastlingRights, GameResult, GameState};
use chess_core::{CastlingSide, Color, Coordinate, Move, Piece, Promotion};
use thiserror::Error;
use tracing::{debug, info};

/// Reasons a move is refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("game has already ended")]
    GameAlreadyOver,

    #[error("no piece at {0}")]
    NoPieceAtSource(Coordinate),

    #[error("wrong colour piece: it is {expected}'s turn")]
    WrongSideToMove { expected: Color },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("the pawn on {0} must be promoted first")]
    PromotionPending(Coordinate),
}

/// Reasons a promotion is refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PromotionError {
    #[error("no pawn is waiting to be promoted")]
    NoPromotionPending,
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The move as requested.
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece that was taken, including an en passant victim.
    pub captured: Option<Piece>,
    /// True if the move captured en passant.
    pub en_passant: bool,
    /// The wing castled toward, if the move was castling.
    pub castling: Option<CastlingSide>,
    /// Filled in once the promotion is resolved.
    pub promotion: Option<Promotion>,
}

impl GameMove {
    fn new(mov: Move, effects: MoveEffects) -> Self {
        GameMove {
            mov,
            piece: effects.piece,
            captured: effects.captured,
            en_passant: effects.en_passant,
            castling: effects.castling,
            promotion: None,
        }
    }
}

/// A chess game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    moves: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Game {
            board: Board::starting(),
            state: GameState::new_game(),
            moves: Vec::new(),
        }
    }

    /// Creates a game from a custom position.
    ///
    /// If the side to move has no legal moves the game is over at once.
    /// The board is taken as given: one king per color is expected but not
    /// checked, and boards missing a king are accepted.
    pub fn from_position(board: Board, state: GameState) -> Self {
        let mut game = Game {
            board,
            state,
            moves: Vec::new(),
        };
        if game.state.pending_promotion.is_none() {
            game.check_game_end();
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the piece on a square, if any.
    pub fn piece_at(&self, sq: Coordinate) -> Option<Piece> {
        self.board.get(sq)
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling
    }

    pub fn en_passant_target(&self) -> Option<Coordinate> {
        self.state.en_passant
    }

    /// Square of the pawn awaiting [`promote`](Game::promote), if any.
    pub fn pending_promotion(&self) -> Option<Coordinate> {
        self.state.pending_promotion
    }

    pub fn result(&self) -> GameResult {
        self.state.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        movegen::is_in_check(&self.board, &self.state, self.state.side_to_move)
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the legal moves of the piece on `from`.
    ///
    /// Empty when the game is over, a promotion is pending, the square is
    /// empty, or the piece belongs to the side not on move.
    pub fn legal_moves(&self, from: Coordinate) -> MoveList {
        if self.is_game_over() || self.state.pending_promotion.is_some() {
            return MoveList::new();
        }
        match self.board.get(from) {
            Some(piece) if piece.color == self.state.side_to_move => {
                movegen::legal_moves_from(&self.board, &self.state, from)
            }
            _ => MoveList::new(),
        }
    }

    /// Returns every legal move of the side to move.
    pub fn all_legal_moves(&self) -> MoveList {
        if self.is_game_over() || self.state.pending_promotion.is_some() {
            return MoveList::new();
        }
        movegen::generate_moves(&self.board, &self.state)
    }

    fn validate(&self, m: Move) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if let Some(sq) = self.state.pending_promotion {
            return Err(MoveError::PromotionPending(sq));
        }

        let piece = self
            .board
            .get(m.from)
            .ok_or(MoveError::NoPieceAtSource(m.from))?;
        if piece.color != self.state.side_to_move {
            return Err(MoveError::WrongSideToMove {
                expected: self.state.side_to_move,
            });
        }

        if !self.legal_moves(m.from).contains(&m) {
            return Err(MoveError::IllegalMove(m));
        }
        Ok(())
    }

    /// Applies a move for the side to move.
    ///
    /// A pawn reaching the last rank leaves the game waiting for
    /// [`promote`](Game::promote); no further move is accepted until then.
    pub fn apply_move(&mut self, m: Move) -> Result<(), MoveError> {
        if let Err(e) = self.validate(m) {
            debug!(mov = %m, error = %e, "rejected move");
            return Err(e);
        }

        let Some(effects) = movegen::make_move(&mut self.board, &mut self.state, m) else {
            return Err(MoveError::NoPieceAtSource(m.from));
        };
        self.moves.push(GameMove::new(m, effects));
        debug!(
            mov = %m,
            piece = %effects.piece,
            captured = ?effects.captured,
            castling = ?effects.castling,
            en_passant = effects.en_passant,
            "applied move"
        );

        if effects.promotes {
            debug!(square = %m.to, "awaiting promotion");
        } else {
            self.check_game_end();
        }
        Ok(())
    }

    /// Replaces the pawn awaiting promotion with a piece of the chosen kind.
    pub fn promote(&mut self, choice: Promotion) -> Result<(), PromotionError> {
        let sq = self
            .state
            .pending_promotion
            .take()
            .ok_or(PromotionError::NoPromotionPending)?;

        // The turn already passed, so the pawn belongs to the other side.
        let color = self
            .board
            .get(sq)
            .map_or(self.state.side_to_move.opposite(), |pawn| pawn.color);
        self.board.place(sq, Piece::new(choice.piece_kind(), color));
        if let Some(last) = self.moves.last_mut() {
            last.promotion = Some(choice);
        }
        debug!(square = %sq, piece = %choice, "promoted pawn");

        self.check_game_end();
        Ok(())
    }

    /// Ends the game if the side to move has no legal moves.
    fn check_game_end(&mut self) {
        if self.is_game_over() || movegen::has_legal_move(&self.board, &self.state) {
            return;
        }

        let stuck = self.state.side_to_move;
        self.state.result = if self.is_check() {
            GameResult::win_for(stuck.opposite())
        } else {
            GameResult::Draw
        };
        info!(result = %self.state.result, plies = self.moves.len(), "game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    fn sq(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(sq(from.0, from.1), sq(to.0, to.1))
    }

    fn play(game: &mut Game, moves: &[&str]) {
        for m in moves {
            game.apply_move(Move::from_squares(m).unwrap()).unwrap();
        }
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.ply_count(), 0);
        assert!(!game.is_game_over());
        assert!(!game.is_check());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.castling_rights(), CastlingRights::ALL);
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.all_legal_moves().len(), 20);
    }

    #[test]
    fn make_move_switches_sides() {
        let mut game = Game::new();
        game.apply_move(mv((6, 4), (4, 4))).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.ply_count(), 1);
        assert_eq!(game.piece_at(sq(4, 4)), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(game.piece_at(sq(6, 4)), None);
        assert_eq!(game.move_history()[0].mov, mv((6, 4), (4, 4)));
    }

    #[test]
    fn no_piece_at_source() {
        let mut game = Game::new();
        assert_eq!(
            game.apply_move(mv((4, 4), (3, 4))),
            Err(MoveError::NoPieceAtSource(sq(4, 4)))
        );
    }

    #[test]
    fn wrong_side_to_move() {
        let mut game = Game::new();
        assert_eq!(
            game.apply_move(mv((1, 4), (3, 4))),
            Err(MoveError::WrongSideToMove {
                expected: Color::White
            })
        );
        assert!(game.legal_moves(sq(1, 4)).is_empty());
    }

    #[test]
    fn illegal_move() {
        let mut game = Game::new();
        let m = mv((6, 4), (3, 4)); // Can't move pawn 3 squares
        assert_eq!(game.apply_move(m), Err(MoveError::IllegalMove(m)));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn checkmate_fools_mate() {
        let mut game = Game::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(game.is_game_over());
        assert!(game.is_check());
        assert_eq!(game.result(), GameResult::BlackWins);
    }

    #[test]
    fn cannot_move_after_game_over() {
        let mut game = Game::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(
            game.apply_move(mv((6, 0), (5, 0))),
            Err(MoveError::GameAlreadyOver)
        );
        assert!(game.legal_moves(sq(6, 0)).is_empty());
        assert!(game.all_legal_moves().is_empty());
    }

    #[test]
    fn stalemate_from_position() {
        let mut board = Board::empty();
        board.place(sq(0, 7), Piece::black(PieceKind::King));
        board.place(sq(1, 5), Piece::white(PieceKind::Queen));
        board.place(sq(2, 6), Piece::white(PieceKind::King));
        let state = GameState::new_game()
            .with_side_to_move(Color::Black)
            .with_castling(CastlingRights::NONE);

        let game = Game::from_position(board, state);

        assert!(game.is_game_over());
        assert_eq!(game.result(), GameResult::Draw);
    }

    #[test]
    fn promotion_flow() {
        let mut board = Board::empty();
        board.place(sq(7, 4), Piece::white(PieceKind::King));
        board.place(sq(1, 0), Piece::white(PieceKind::Pawn));
        board.place(sq(3, 7), Piece::black(PieceKind::King));
        let state = GameState::new_game().with_castling(CastlingRights::NONE);
        let mut game = Game::from_position(board, state);

        game.apply_move(mv((1, 0), (0, 0))).unwrap();
        assert_eq!(game.pending_promotion(), Some(sq(0, 0)));
        assert!(game.all_legal_moves().is_empty());
        assert!(game.legal_moves(sq(3, 7)).is_empty());
        assert!(game.legal_moves(sq(7, 4)).is_empty());
        assert_eq!(
            game.apply_move(mv((3, 7), (4, 7))),
            Err(MoveError::PromotionPending(sq(0, 0)))
        );

        game.promote(Promotion::Knight).unwrap();

        assert_eq!(game.piece_at(sq(0, 0)), Some(Piece::white(PieceKind::Knight)));
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.move_history()[0].promotion, Some(Promotion::Knight));
        assert_eq!(game.side_to_move(), Color::Black);
        game.apply_move(mv((3, 7), (4, 7))).unwrap();
    }

    #[test]
    fn promote_without_pending_pawn() {
        let mut game = Game::new();
        assert_eq!(
            game.promote(Promotion::Queen),
            Err(PromotionError::NoPromotionPending)
        );
    }

    #[test]
    fn promotion_that_mates_is_scored_after_choice() {
        // Black king boxed in on h8 by its own pawns; a8 promotion mates
        // as a queen or rook, not as a knight.
        let mut board = Board::empty();
        board.place(sq(7, 4), Piece::white(PieceKind::King));
        board.place(sq(1, 0), Piece::white(PieceKind::Pawn));
        board.place(sq(0, 7), Piece::black(PieceKind::King));
        board.place(sq(1, 6), Piece::black(PieceKind::Pawn));
        board.place(sq(1, 7), Piece::black(PieceKind::Pawn));
        let state = GameState::new_game().with_castling(CastlingRights::NONE);

        let mut game = Game::from_position(board.clone(), state);
        game.apply_move(mv((1, 0), (0, 0))).unwrap();
        assert_eq!(game.result(), GameResult::InProgress);
        game.promote(Promotion::Queen).unwrap();
        assert_eq!(game.result(), GameResult::WhiteWins);

        let mut game = Game::from_position(board, state);
        game.apply_move(mv((1, 0), (0, 0))).unwrap();
        game.promote(Promotion::Knight).unwrap();
        assert_eq!(game.result(), GameResult::InProgress);
    }

    #[test]
    fn promotion_that_stalemates_is_scored_after_choice() {
        // Black king on h1: the white king covers g1 and g2, and a queen or
        // bishop on b8 covers h2 along the long diagonal.
        let mut board = Board::empty();
        board.place(sq(6, 5), Piece::white(PieceKind::King));
        board.place(sq(1, 1), Piece::white(PieceKind::Pawn));
        board.place(sq(7, 7), Piece::black(PieceKind::King));
        let state = GameState::new_game().with_castling(CastlingRights::NONE);

        for (choice, expected) in [
            (Promotion::Queen, GameResult::Draw),
            (Promotion::Bishop, GameResult::Draw),
            (Promotion::Rook, GameResult::InProgress),
            (Promotion::Knight, GameResult::InProgress),
        ] {
            let mut game = Game::from_position(board.clone(), state);
            game.apply_move(mv((1, 1), (0, 1))).unwrap();
            assert_eq!(game.result(), GameResult::InProgress);

            game.promote(choice).unwrap();

            assert!(!game.is_check());
            assert_eq!(game.result(), expected, "promoting to {}", choice);
        }
    }

    #[test]
    fn castling_rights_revoked_by_king_and_rook_moves() {
        let mut game = Game::new();
        play(&mut game, &["g1f3", "g8f6", "h1g1", "b8c6", "e2e4", "e7e5", "e1e2"]);
        let rights = game.castling_rights();
        assert!(!rights.has(Color::White, CastlingSide::King));
        assert!(!rights.has(Color::White, CastlingSide::Queen));
        assert!(rights.has(Color::Black, CastlingSide::King));
        assert!(rights.has(Color::Black, CastlingSide::Queen));

        // Returning the king home does not restore anything.
        play(&mut game, &["d7d6", "e2e1"]);
        assert!(!game.castling_rights().has_any(Color::White));
    }

    #[test]
    fn rejected_move_leaves_state_alone() {
        let mut game = Game::new();
        play(&mut game, &["e2e4"]);
        let before = *game.state();
        assert!(game.apply_move(mv((0, 4), (2, 4))).is_err());
        assert_eq!(*game.state(), before);
        assert_eq!(game.ply_count(), 1);
    }
}
