#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerMark {
    PlayerOne,
    PlayerTwo,
}

impl PlayerMark {
    /// Get the other player
    pub fn other(self) -> PlayerMark {
        match self {
            PlayerMark::PlayerOne => PlayerMark::PlayerTwo,
            PlayerMark::PlayerTwo => PlayerMark::PlayerOne,
        }
    }

    /// Player number as shown to the user (1 or 2)
    pub fn number(self) -> usize {
        match self {
            PlayerMark::PlayerOne => 1,
            PlayerMark::PlayerTwo => 2,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerMark::PlayerOne => "Player 1",
            PlayerMark::PlayerTwo => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerMark::PlayerOne.other(), PlayerMark::PlayerTwo);
        assert_eq!(PlayerMark::PlayerTwo.other(), PlayerMark::PlayerOne);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(PlayerMark::PlayerOne.name(), "Player 1");
        assert_eq!(PlayerMark::PlayerTwo.name(), "Player 2");
        assert_eq!(PlayerMark::PlayerTwo.number(), 2);
    }

    #[test]
    fn test_marks_are_ordered() {
        assert!(PlayerMark::PlayerOne < PlayerMark::PlayerTwo);
    }
}
