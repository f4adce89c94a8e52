use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_msg_equality() {
        assert_eq!(SystemMsg::Quit, SystemMsg::Quit);
        assert_ne!(SystemMsg::Quit, SystemMsg::Suspend);
        assert_eq!(
            SystemMsg::ShowError("test".to_string()),
            SystemMsg::ShowError("test".to_string())
        );
    }

    #[test]
    fn test_system_msg_serialization() -> Result<()> {
        let msg = SystemMsg::UpdateStatusMessage("test status".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SystemMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
