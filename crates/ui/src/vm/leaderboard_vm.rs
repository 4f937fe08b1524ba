use quiz_core::model::{LeaderboardEntry, Medal, RankTier, UserId};
use services::LeaderboardBoard;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankRowVm {
    pub key: u64,
    pub rank: u32,
    pub name: String,
    pub score_label: String,
    pub icon: &'static str,
    pub badge_class: &'static str,
    pub is_current_user: bool,
}

impl RankRowVm {
    #[must_use]
    pub fn new(entry: &LeaderboardEntry, current_user: Option<UserId>) -> Self {
        let icon = match entry.medal() {
            Some(Medal::Gold) => "👑",
            Some(Medal::Silver) => "🥈",
            Some(Medal::Bronze) => "🏅",
            None => "🏆",
        };
        let badge_class = match entry.tier() {
            RankTier::Podium => "badge high",
            RankTier::TopTen => "badge mid",
            RankTier::Field => "badge low",
        };
        Self {
            key: entry.id().value(),
            rank: entry.rank(),
            name: entry.name().to_string(),
            score_label: entry.score().to_string(),
            icon,
            badge_class,
            is_current_user: current_user.is_some_and(|user| user.value() == entry.id().value()),
        }
    }

    /// Row styling: the signed-in student first, then podium rows.
    #[must_use]
    pub fn row_class(&self) -> &'static str {
        if self.is_current_user {
            "rank-row current"
        } else if self.rank <= 3 {
            "rank-row podium"
        } else {
            "rank-row"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardVm {
    pub podium: Vec<RankRowVm>,
    pub rows: Vec<RankRowVm>,
    pub participants: usize,
    pub average_label: String,
    pub highest_label: String,
}

#[must_use]
pub fn map_leaderboard(board: &LeaderboardBoard, current_user: Option<UserId>) -> LeaderboardVm {
    let row = |entry: &LeaderboardEntry| RankRowVm::new(entry, current_user);
    LeaderboardVm {
        podium: board.podium().iter().map(row).collect(),
        rows: board.entries.iter().map(row).collect(),
        participants: board.stats.participants,
        average_label: format!("{}%", board.stats.average),
        highest_label: format!("{}%", board.stats.highest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{ParticipantId, Score};

    fn entry(id: u64, score: u8, rank: u32) -> LeaderboardEntry {
        LeaderboardEntry::new(
            ParticipantId::new(id),
            format!("Player {id}"),
            Score::new(score).unwrap(),
            rank,
        )
        .unwrap()
    }

    #[test]
    fn icons_and_badges_by_rank() {
        let rows: Vec<_> = [1, 2, 3, 4, 11]
            .into_iter()
            .map(|rank| RankRowVm::new(&entry(u64::from(rank), 90, rank), None))
            .collect();
        let icons: Vec<&str> = rows.iter().map(|r| r.icon).collect();
        assert_eq!(icons, ["👑", "🥈", "🏅", "🏆", "🏆"]);
        assert_eq!(rows[2].badge_class, "badge high");
        assert_eq!(rows[3].badge_class, "badge mid");
        assert_eq!(rows[4].badge_class, "badge low");
        assert_eq!(rows[0].row_class(), "rank-row podium");
        assert_eq!(rows[3].row_class(), "rank-row");
    }

    #[test]
    fn current_user_is_highlighted() {
        let row = RankRowVm::new(&entry(7, 60, 12), Some(UserId::new(7)));
        assert!(row.is_current_user);
        assert_eq!(row.row_class(), "rank-row current");
    }

    #[test]
    fn board_labels() {
        let board = LeaderboardBoard::new(vec![entry(1, 98, 1), entry(2, 89, 2)]);
        let vm = map_leaderboard(&board, None);
        assert_eq!(vm.podium.len(), 2);
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.average_label, "94%");
        assert_eq!(vm.highest_label, "98%");
    }
}
