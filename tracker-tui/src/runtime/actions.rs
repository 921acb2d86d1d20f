use crate::app::App;
use tracker_client::TrackerClient;

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App, client: &mut TrackerClient) {
    match action {
        Action::Dispatch(request) => {
            let handle = client.dispatch(request);
            app.track_call(handle);
        }
    }
}
