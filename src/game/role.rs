use crate::RawAction;
use crate::codec::lehmer;
use crate::error::ActionError;

/// The three asymmetric-information roles. Cheaters each see one piece of
/// the settlement; customers see nothing but carry a target position.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    ValueCheater,
    HighLowCheater,
    Customer,
}

/// Fixed convention baked into the game, not an algorithm: permutation
/// slots 0 and 1 each see one candidate contract value, slot 2 sees the
/// high-low direction, every slot past that is a customer. Tables larger
/// than 4 just seat more customers.
impl From<usize> for Role {
    fn from(slot: usize) -> Self {
        match slot {
            0 | 1 => Self::ValueCheater,
            2 => Self::HighLowCheater,
            _ => Self::Customer,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ValueCheater => write!(f, "ValueCheater"),
            Self::HighLowCheater => write!(f, "HighLowCheater"),
            Self::Customer => write!(f, "Customer"),
        }
    }
}

/// One role deal for the whole table: permutation[i] is player i's slot,
/// roles[i] the role that slot carries. Only validated constructions exist,
/// so ranking an Assignment cannot fail. Serialized as the bare permutation;
/// roles are derived, not data.
#[derive(Debug, Clone, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Assignment {
    permutation: Vec<usize>,
    roles: Vec<Role>,
}

impl From<Assignment> for Vec<usize> {
    fn from(deal: Assignment) -> Self {
        deal.permutation
    }
}

impl Assignment {
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
    pub fn role_of(&self, player: usize) -> Option<Role> {
        self.roles.get(player).copied()
    }

    /// the deal where player i sits in slot i.
    pub fn identity(n: usize) -> Self {
        Self::derived((0..n).collect())
    }

    /// the x-th role deal for an n-player table, in Lehmer order.
    pub fn unrank(x: RawAction, n: usize) -> Result<Self, ActionError> {
        Ok(Self::derived(lehmer::unrank(x, n)?))
    }

    pub fn rank(&self) -> RawAction {
        lehmer::rank(&self.permutation).expect("assignments hold valid permutations")
    }

    fn derived(permutation: Vec<usize>) -> Self {
        let roles = permutation.iter().map(|&slot| Role::from(slot)).collect();
        Self { permutation, roles }
    }
}

impl TryFrom<Vec<usize>> for Assignment {
    type Error = ActionError;
    fn try_from(permutation: Vec<usize>) -> Result<Self, Self::Error> {
        if lehmer::is_permutation(&permutation) {
            Ok(Self::derived(permutation))
        } else {
            Err(ActionError::InvalidPermutation {
                n: permutation.len(),
            })
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Player roles: ")?;
        for (i, role) in self.roles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "P{}={}", i, role)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Assignment {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let ref mut rng = rand::rng();
        let mut permutation = (0..crate::PLAYERS).collect::<Vec<usize>>();
        permutation.shuffle(rng);
        Self::derived(permutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn slots_map_to_fixed_roles() {
        assert!(Role::from(0) == Role::ValueCheater);
        assert!(Role::from(1) == Role::ValueCheater);
        assert!(Role::from(2) == Role::HighLowCheater);
        for slot in 3..10 {
            assert!(Role::from(slot) == Role::Customer);
        }
    }

    #[test]
    fn identity_seats_cheaters_first() {
        let deal = Assignment::identity(6);
        assert!(deal.roles()[0] == Role::ValueCheater);
        assert!(deal.roles()[1] == Role::ValueCheater);
        assert!(deal.roles()[2] == Role::HighLowCheater);
        assert!(deal.roles()[3] == Role::Customer);
        assert!(deal.roles()[4] == Role::Customer);
        assert!(deal.roles()[5] == Role::Customer);
    }

    #[test]
    fn roles_follow_the_permutation() {
        let deal = Assignment::try_from(vec![3, 2, 0, 1]).unwrap();
        assert!(deal.roles() == &[
            Role::Customer,
            Role::HighLowCheater,
            Role::ValueCheater,
            Role::ValueCheater,
        ]);
        assert!(deal.role_of(0) == Some(Role::Customer));
        assert!(deal.role_of(4) == None);
    }

    #[test]
    fn unrank_inverts_rank() {
        for _ in 0..100 {
            let deal = Assignment::random();
            assert!(Assignment::unrank(deal.rank(), crate::PLAYERS).unwrap() == deal);
        }
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(Assignment::try_from(vec![0, 0, 1, 2]).is_err());
        assert!(Assignment::try_from(vec![0, 1, 2, 4]).is_err());
    }

    #[test]
    fn displays_per_player_roles() {
        let deal = Assignment::identity(4);
        let shown = format!("{}", deal);
        assert!(shown.starts_with("Player roles: P0=ValueCheater"));
        assert!(shown.ends_with("P3=Customer"));
    }
}
