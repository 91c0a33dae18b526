//! Shared test host double.
//!
//! Records every scoring and messaging call so tests can assert on the
//! exact side effects of a decision.

#![allow(dead_code)]

use std::collections::HashMap;

use ctf_arbiter::{GameTime, Host, PlayerId, Team};

pub struct FakeHost {
    pub time: f64,
    pub team_sizes: HashMap<Team, u32>,
    pub player_teams: HashMap<PlayerId, Team>,
    pub grab_delay: i64,
    pub disallow_self_cap: bool,
    pub warn_unfair: bool,

    pub wins: Vec<(PlayerId, u32)>,
    pub losses: Vec<(PlayerId, u32)>,
    pub private_lines: Vec<(PlayerId, String)>,
    pub broadcast_lines: Vec<String>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            time: 1000.0,
            team_sizes: HashMap::new(),
            player_teams: HashMap::new(),
            grab_delay: 20,
            disallow_self_cap: true,
            warn_unfair: true,
            wins: Vec::new(),
            losses: Vec::new(),
            private_lines: Vec::new(),
            broadcast_lines: Vec::new(),
        }
    }

    pub fn join(&mut self, player: PlayerId, team: Team) {
        self.player_teams.insert(player, team);
    }

    pub fn set_team_size(&mut self, team: Team, size: u32) {
        self.team_sizes.insert(team, size);
    }

    pub fn advance(&mut self, secs: f64) {
        self.time += secs;
    }

    pub fn private_to(&self, player: PlayerId) -> Vec<&str> {
        self.private_lines
            .iter()
            .filter(|(p, _)| *p == player)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    pub fn scoring_calls(&self) -> usize {
        self.wins.len() + self.losses.len()
    }
}

impl Host for FakeHost {
    fn now(&self) -> GameTime {
        GameTime::from_secs(self.time)
    }

    fn team_size(&self, team: Team) -> u32 {
        self.team_sizes.get(&team).copied().unwrap_or(0)
    }

    fn player_team(&self, player: PlayerId) -> Team {
        self.player_teams
            .get(&player)
            .copied()
            .unwrap_or(Team::Observer)
    }

    fn player_name(&self, player: PlayerId) -> String {
        format!("player-{}", player.raw())
    }

    fn add_wins(&mut self, player: PlayerId, points: u32) {
        self.wins.push((player, points));
    }

    fn add_losses(&mut self, player: PlayerId, points: u32) {
        self.losses.push((player, points));
    }

    fn send_private(&mut self, player: PlayerId, line: &str) {
        self.private_lines.push((player, line.to_string()));
    }

    fn broadcast(&mut self, line: &str) {
        self.broadcast_lines.push(line.to_string());
    }

    fn grab_delay_secs(&self) -> i64 {
        self.grab_delay
    }

    fn self_capture_disallowed(&self) -> bool {
        self.disallow_self_cap
    }

    fn warn_unfair_grabs(&self) -> bool {
        self.warn_unfair
    }
}
