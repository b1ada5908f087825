pub mod results;
pub mod take_flow;

pub use results::{is_passing, render_result, PASS_THRESHOLD};
pub use take_flow::{FlowPhase, TakeQuizFlow};
