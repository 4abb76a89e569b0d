pub mod json_api;

pub use json_api::{
    record_ball_json, start_match_json, summary_json, undo_json, BallResponse, StartMatchRequest,
};
