//! Which studio actions are offered in which phase.

use headshot_core::{Phase, StudioController};

/// A menu entry in the studio loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChoosePhoto,
    PickStyle,
    Generate,
    Download,
    TryAgain,
    EnterApiKey,
    Exit,
}

impl Action {
    /// Actions valid for the controller's current state, in menu order.
    ///
    /// Generate only appears when a photo is present and nothing is in
    /// flight. The API key entry appears when no key is configured or the
    /// last failure was a credential problem.
    pub fn available(controller: &StudioController, has_api_key: bool) -> Vec<Action> {
        let state = controller.state();
        let mut actions = vec![Action::ChoosePhoto, Action::PickStyle];

        if controller.can_transform() {
            actions.push(Action::Generate);
        }
        if controller.phase() == Phase::Done {
            actions.push(Action::Download);
            actions.push(Action::TryAgain);
        }
        let credential_failure = state
            .error
            .as_ref()
            .is_some_and(|failure| failure.needs_credential());
        if !has_api_key || credential_failure {
            actions.push(Action::EnterApiKey);
        }
        actions.push(Action::Exit);
        actions
    }

    /// Menu label, which depends on the current state.
    pub fn label(self, controller: &StudioController) -> String {
        match self {
            Action::ChoosePhoto if controller.state().original.is_some() => {
                "Change photo".to_string()
            }
            Action::ChoosePhoto => "Choose photo".to_string(),
            Action::PickStyle => format!("Select style ({})", controller.style()),
            Action::Generate if controller.phase() == Phase::Failed => {
                "Retry generation".to_string()
            }
            Action::Generate => "Generate resume photo".to_string(),
            Action::Download => "Download HD".to_string(),
            Action::TryAgain => "Try again".to_string(),
            Action::EnterApiKey => "Enter API key".to_string(),
            Action::Exit => "Exit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headshot_core::{EncodedImage, TransformError};

    fn uploaded() -> StudioController {
        let mut controller = StudioController::new();
        controller
            .upload(EncodedImage::new("image/jpeg", "/9j/"))
            .unwrap();
        controller
    }

    #[test]
    fn test_idle_has_no_generate() {
        let controller = StudioController::new();
        let actions = Action::available(&controller, true);
        assert_eq!(
            actions,
            vec![Action::ChoosePhoto, Action::PickStyle, Action::Exit]
        );
    }

    #[test]
    fn test_ready_offers_generate() {
        let controller = uploaded();
        let actions = Action::available(&controller, true);
        assert!(actions.contains(&Action::Generate));
        assert!(!actions.contains(&Action::Download));
        assert_eq!(Action::ChoosePhoto.label(&controller), "Change photo");
    }

    #[test]
    fn test_loading_disables_generate() {
        let mut controller = uploaded();
        controller.begin_transform().unwrap();
        let actions = Action::available(&controller, true);
        assert!(!actions.contains(&Action::Generate));
    }

    #[test]
    fn test_done_offers_download_and_try_again() {
        let mut controller = uploaded();
        controller.begin_transform().unwrap();
        controller
            .finish_transform(Ok(EncodedImage::new("image/png", "AAAA")))
            .unwrap();
        let actions = Action::available(&controller, true);
        assert!(actions.contains(&Action::Download));
        assert!(actions.contains(&Action::TryAgain));
        assert!(actions.contains(&Action::Generate));
    }

    #[test]
    fn test_expired_credential_offers_key_entry() {
        let mut controller = uploaded();
        controller.begin_transform().unwrap();
        controller
            .finish_transform(Err(TransformError::CredentialExpired))
            .unwrap();
        let actions = Action::available(&controller, true);
        assert!(actions.contains(&Action::EnterApiKey));
        assert_eq!(Action::Generate.label(&controller), "Retry generation");
    }

    #[test]
    fn test_missing_key_offers_key_entry() {
        let controller = StudioController::new();
        let actions = Action::available(&controller, false);
        assert!(actions.contains(&Action::EnterApiKey));
    }

    #[test]
    fn test_exit_is_always_last() {
        let controller = uploaded();
        let actions = Action::available(&controller, false);
        assert_eq!(actions.last(), Some(&Action::Exit));
    }
}
