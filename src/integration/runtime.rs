use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::{CmdExecutor, CmdFailure, RotationControl},
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::rotation_service::RotationWatch,
};

/// Message loop around the pure `update` function
///
/// Raw messages arrive either through [`Runtime::send_raw_msg`] or from
/// background producers holding a clone of the raw sender (the rotation timer).
/// Rotation ticks count only while their timer is the attached one.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
    rotation: Option<RotationWatch>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        Self::with_raw_channel(initial_state, raw_msg_tx, raw_msg_rx)
    }

    /// Build around an existing raw channel, so producers can be started first
    pub fn with_raw_channel(
        initial_state: AppState,
        raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
        raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    ) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
            rotation: None,
        }
    }

    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    pub fn add_render_request_sender(&mut self, render_sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    pub fn add_rotation_sender(&mut self, rotation_sender: mpsc::UnboundedSender<RotationControl>) {
        self.cmd_executor.set_rotation_sender(rotation_sender);
    }

    /// Accept ticks from this timer only; ticks from earlier timers are dropped
    pub fn attach_rotation(&mut self, watch: RotationWatch) {
        self.rotation = Some(watch);
    }

    pub fn detach_rotation(&mut self) {
        self.rotation = None;
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Wait for the next raw message from a background producer and queue it
    pub async fn recv_raw(&mut self) {
        if let Some(raw_msg) = self.raw_msg_rx.recv().await {
            self.raw_msg_queue.push_back(raw_msg);
        }
    }

    /// Take all commands produced since the last call
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute queued commands and return the ones that failed
    pub fn execute_pending_commands(&mut self) -> Vec<CmdFailure> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate every queued raw message, then run every queued domain message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.raw_msg_queue.push_back(raw_msg);
        }
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if let RawMsg::RotationTick(generation) = raw_msg {
                if !self.rotation.as_ref().is_some_and(|w| w.accepts(generation)) {
                    log::debug!("Dropping stale rotation tick #{generation}");
                    continue;
                }
            }
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<CmdFailure> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        let executor = self.cmd_executor.get_stats();
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            active_slide: self.state.hero.rotator.active_index(),
            menu_open: self.state.nav.menu_open,
            page_offset: self.state.page.offset,
            has_tui_sender: executor.has_tui_sender,
            has_render_sender: executor.has_render_sender,
            has_rotation_sender: executor.has_rotation_sender,
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub active_slide: usize,
    pub menu_open: bool,
    pub page_offset: u16,
    pub has_tui_sender: bool,
    pub has_render_sender: bool,
    pub has_rotation_sender: bool,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use tokio::time;

    use super::*;
    use crate::{
        core::msg::{hero::HeroMsg, system::SystemMsg},
        domain::rotator::RotatorError,
        infrastructure::{config::Config, rotation_service::RotationService},
    };

    const CADENCE: Duration = Duration::from_millis(5000);

    fn create_test_runtime() -> Result<Runtime, RotatorError> {
        let config = Config::embedded().unwrap_or_default();
        Ok(Runtime::new(AppState::new_with_config(config)?))
    }

    fn key(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
    }

    #[test]
    fn test_runtime_creation() -> Result<(), RotatorError> {
        let runtime = create_test_runtime()?;
        let stats = runtime.get_stats();
        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.active_slide, 0);
        assert!(!stats.has_tui_sender);
        Ok(())
    }

    #[test]
    fn test_send_message() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        runtime.send_msg(Msg::Hero(HeroMsg::Next));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();
        assert_eq!(runtime.get_stats().queued_messages, 0);
        assert_eq!(runtime.state().hero.rotator.active_index(), 1);
        assert_eq!(commands, vec![Cmd::RequestRender]);
        Ok(())
    }

    #[test]
    fn test_key_presses_are_translated() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        runtime.send_raw_msg(key('3'));
        runtime.send_raw_msg(key('m'));
        runtime.process_all_messages();

        let stats = runtime.get_stats();
        assert_eq!(stats.active_slide, 2);
        assert!(stats.menu_open);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_raw_channel() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        let sender = runtime.get_raw_sender();
        let timer = RotationService::new(Duration::from_secs(60), sender.clone()).start();
        runtime.attach_rotation(timer.watch());
        assert!(sender.send(RawMsg::RotationTick(timer.generation())).is_ok());
        assert!(sender.send(RawMsg::RotationTick(timer.generation())).is_ok());

        // Not processed yet
        assert_eq!(runtime.state().hero.rotator.active_index(), 0);

        runtime.process_all_messages();
        assert_eq!(runtime.state().hero.rotator.active_index(), 2);
        Ok(())
    }

    #[test]
    fn test_pending_commands_are_drained() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        runtime.process_message(Msg::Hero(HeroMsg::Next));
        runtime.process_message(Msg::System(SystemMsg::Quit));

        assert_eq!(runtime.pending_commands(), vec![Cmd::RequestRender]);
        assert!(runtime.pending_commands().is_empty());
        assert!(runtime.state().system.should_quit);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_tick_is_dropped_after_teardown() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        let mut timer = RotationService::new(CADENCE, runtime.get_raw_sender()).start();
        runtime.attach_rotation(timer.watch());

        time::sleep(CADENCE + Duration::from_millis(5)).await;
        tokio::task::yield_now().await;
        timer.teardown();

        runtime.process_all_messages();
        assert_eq!(runtime.state().hero.rotator.active_index(), 0);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_from_replaced_timer_are_dropped() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        let replaced = RotationService::new(CADENCE, runtime.get_raw_sender()).start();
        let current = RotationService::new(CADENCE, runtime.get_raw_sender()).start();
        runtime.attach_rotation(current.watch());

        runtime.send_raw_msg(RawMsg::RotationTick(replaced.generation()));
        runtime.process_all_messages();
        assert_eq!(runtime.state().hero.rotator.active_index(), 0);

        runtime.send_raw_msg(RawMsg::RotationTick(current.generation()));
        runtime.process_all_messages();
        assert_eq!(runtime.state().hero.rotator.active_index(), 1);
        Ok(())
    }

    #[test]
    fn test_ticks_without_attached_timer_are_dropped() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        runtime.send_raw_msg(RawMsg::RotationTick(1));
        runtime.process_all_messages();
        assert_eq!(runtime.state().hero.rotator.active_index(), 0);
        Ok(())
    }

    #[test]
    fn test_update_cycle_forwards_render_requests() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_tx);
        assert!(runtime.get_stats().has_render_sender);

        runtime.send_msg(Msg::Hero(HeroMsg::Next));
        assert!(runtime.run_update_cycle().is_empty());
        assert!(render_rx.try_recv().is_ok());
        Ok(())
    }

    #[test]
    fn test_update_cycle_returns_failed_commands() -> Result<(), RotatorError> {
        let mut config = Config::embedded().unwrap_or_default();
        config.hero.reset_on_navigation = true;
        let mut runtime = Runtime::new(AppState::new_with_config(config)?);
        let (rotation_tx, rotation_rx) = mpsc::unbounded_channel();
        runtime.add_rotation_sender(rotation_tx);
        drop(rotation_rx);

        runtime.send_msg(Msg::Hero(HeroMsg::Next));
        let failures = runtime.run_update_cycle();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].command, "ResetRotation");
        Ok(())
    }

    #[test]
    fn test_out_of_range_key_reports_error() -> Result<(), RotatorError> {
        let mut runtime = create_test_runtime()?;
        runtime.send_raw_msg(key('9'));
        runtime.process_all_messages();
        assert_eq!(runtime.state().hero.rotator.active_index(), 0);
        assert_eq!(
            runtime.state().system.status_message.as_deref(),
            Some("Error: slide index 8 is out of range (0..4)")
        );
        Ok(())
    }
}
