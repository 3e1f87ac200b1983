use quickcheck::{Arbitrary, Gen};

use crate::{full_suit, Board, Card, Game, Player, Ply, Rank, Suit};

/// A board in the shift phase with a random mix of cards and blanks, plus a
/// card that is not on it.
#[derive(Clone, Debug)]
pub struct FullBoard {
    pub board: Board,
    pub card: Card,
}

impl Arbitrary for FullBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = 3 + usize::arbitrary(g) % 5;
        let card = Card::arbitrary(g);
        let mut deck: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&suit| full_suit(suit))
            .filter(|&c| c != card)
            .collect();

        let card_cells: Vec<(usize, usize)> = Board::new(size)
            .get_empty()
            .into_iter()
            .filter(|_| bool::arbitrary(g))
            .collect();
        let mut board = Board::with_empty(size, &card_cells);
        for (row, column) in card_cells {
            let idx = usize::arbitrary(g) % deck.len();
            let card = deck.swap_remove(idx);
            board
                .update(&Ply { card, row, column })
                .expect("placing on an empty cell");
        }

        FullBoard { board, card }
    }
}

/// A recipe for a random game: the board layout, the number of players and,
/// for every move, which card in hand and which legal target to pick.
#[derive(Clone, Debug)]
pub struct MoveScript {
    pub layout: u8,
    pub num_players: usize,
    pub picks: Vec<(u8, u8)>,
}

impl MoveScript {
    pub fn new_game(&self) -> Game {
        let board = match self.layout % 4 {
            0 => Board::new(5),
            1 => Board::standard(),
            2 => Board::prefilled(5),
            _ => Board::with_empty(5, &[(2, 2), (1, 3), (4, 4)]),
        };
        let players = Suit::ALL
            .iter()
            .take(self.num_players)
            .enumerate()
            .map(|(idx, &suit)| Player::new(format!("Player {}", idx + 1), suit))
            .collect();
        Game::new(board, players)
    }

    pub fn ply_for(&self, game: &Game, (card_pick, target_pick): (u8, u8)) -> Ply {
        let hand = &game.current_player().hand;
        let card = hand[usize::from(card_pick) % hand.len()];
        let targets = game.board().targets();
        let (row, column) = targets[usize::from(target_pick) % targets.len()];
        Ply { card, row, column }
    }
}

impl Arbitrary for MoveScript {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_moves = usize::arbitrary(g) % 60;
        MoveScript {
            layout: u8::arbitrary(g),
            num_players: 1 + usize::arbitrary(g) % 4,
            picks: (0..num_moves)
                .map(|_| (u8::arbitrary(g), u8::arbitrary(g)))
                .collect(),
        }
    }
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Suit::ALL).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Rank::DEAL_ORDER).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}
