//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# pairwheel configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[constraints]
# Nobody in the same group is ever paired with anyone else in that group.
# Names are matched case-insensitively after trimming.
forbidden_groups = []
# forbidden_groups = [["alice", "bob", "carol"], ["dan", "erin"]]

# Announced first, as a pair, whenever both are in the pool.
# locked_pair = ["jake", "pranavi"]

[pool]
# names = ["jake", "pranavi", "nathan"]

[draw]
# spin_duration_ms = 4000   # 0-60000
# pick_delay_ms = 120       # 0-10000, pause between first and second pick
# max_attempts = 16         # 1-1000, re-draws before the round stalls
# max_round_restarts = 32   # 0-1000, stalled rounds started again
# honor_target_hint = true  # wheel settles on the expected person
# min_spins = 5.0           # 1-50
# max_spins = 10.0          # 1-50, >= min_spins

[session]
# seed = 42                 # repeatable shuffles and spins

[logging]
# level = "info"            # trace, debug, info, warn, error
"#
}
