use super::colour::Colour;
use super::moves::{DoubleMove, Move, MoveSet, TicketMove};
use super::player::PlayerRecord;
use super::state::GameState;
use super::ticket::Ticket;
use std::collections::BTreeSet;

impl GameState {
    /// Computes every move the given player may make from `location`.
    ///
    /// Locations occupied by detectives are never reachable. A detective with no other
    /// option is offered exactly one pass; Mr X is never offered a pass, since being
    /// stuck loses him the game.
    pub fn valid_moves(&self, colour: Colour, location: u32) -> MoveSet {
        let mut moves = MoveSet::new();
        let Some(player) = self.player(colour) else {
            return moves;
        };
        let blocked = self.detective_locations();
        let can_double = player.tickets.has(Ticket::Double) && self.double_move_allowed();

        for edge in self.graph.edges_from(location) {
            if blocked.contains(&edge.destination) {
                continue;
            }
            let transport_ticket = Ticket::from_transport(edge.transport);
            for ticket in [transport_ticket, Ticket::Secret] {
                if !player.tickets.has(ticket) {
                    continue;
                }
                let first = TicketMove::new(colour, ticket, edge.destination);
                moves.insert(first.into());
                if can_double {
                    for second in self.second_moves(player, edge.destination, ticket, &blocked) {
                        moves.insert(DoubleMove::new(colour, first, second).into());
                    }
                }
            }
        }

        if colour.is_detective() && moves.is_empty() {
            moves.insert(Move::Pass { colour });
        }
        moves
    }

    /// Computes the possible second legs of a double move, starting at `location` after a
    /// first leg paid for with `first_ticket`.
    fn second_moves(
        &self,
        player: &PlayerRecord,
        location: u32,
        first_ticket: Ticket,
        blocked: &BTreeSet<u32>,
    ) -> BTreeSet<TicketMove> {
        let mut moves = BTreeSet::new();
        for edge in self.graph.edges_from(location) {
            if blocked.contains(&edge.destination) {
                continue;
            }
            let transport_ticket = Ticket::from_transport(edge.transport);
            for ticket in [transport_ticket, Ticket::Secret] {
                let required = if ticket == first_ticket { 2 } else { 1 };
                if player.tickets.get(ticket) >= required {
                    moves.insert(TicketMove::new(player.colour, ticket, edge.destination));
                }
            }
        }
        moves
    }

    /// A double move needs two rounds left in the schedule.
    fn double_move_allowed(&self) -> bool {
        self.current_round + 2 <= self.rounds.len()
    }
}
