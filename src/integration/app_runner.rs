use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand, cmd_executor::RotationControl, raw_msg::RawMsg, state::AppState,
    },
    infrastructure::{
        config::Config,
        rotation_service::{RotationHandle, RotationService},
        tui::{self, event_source::EventSource, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Composition root: owns the terminal, the rotation timer and the runtime
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    cadence: Duration,
    rotation: Option<RotationHandle>,
    last_size: Option<(u16, u16)>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    rotation_rx: mpsc::UnboundedReceiver<RotationControl>,
}

impl AppRunner {
    /// Mount the hero rotation and wire the runtime to the terminal
    ///
    /// Fails with `InvalidConfiguration` when the catalog has no slides.
    pub async fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Result<Self> {
        let cadence = config.hero.cadence();
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (rotator, rotation) =
            RotationService::mount(config.catalog.slides.clone(), cadence, raw_tx.clone())?;

        let initial_state = AppState::new(config, rotator);
        let mut runtime = Runtime::with_raw_channel(initial_state, raw_tx, raw_rx);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        let (rotation_tx, rotation_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);
        runtime.add_render_request_sender(render_req_tx);
        runtime.add_rotation_sender(rotation_tx);
        runtime.attach_rotation(rotation.watch());

        Ok(Self {
            runtime,
            event_source: EventSource::real(Arc::clone(&tui)),
            tui,
            renderer: Renderer::new(),
            cadence,
            rotation: Some(rotation),
            last_size: None,
            tui_cmd_rx,
            render_req_rx,
            rotation_rx,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn rotation_active(&self) -> bool {
        self.rotation.as_ref().is_some_and(RotationHandle::is_active)
    }

    pub fn set_event_source_for_tests(&mut self, source: EventSource) {
        self.event_source = source;
    }

    pub async fn run_one_cycle_for_tests(&mut self) -> Result<()> {
        self.run_one_cycle().await
    }

    pub async fn render_for_tests(&mut self) -> Result<()> {
        self.render().await
    }

    /// Run until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.queue_current_size().await?;

        loop {
            self.run_one_cycle().await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        if let Some(rotation) = self.rotation.take() {
            rotation.shutdown().await;
        }
        self.tui.lock().await.exit()?;
        Ok(())
    }

    async fn run_one_cycle(&mut self) -> Result<()> {
        let saw_tui_render = self.wait_for_input().await;

        // Failed commands come back as a status line on the next cycle
        for failure in self.runtime.run_update_cycle() {
            self.runtime.send_raw_msg(RawMsg::Error(failure.to_string()));
        }

        while let Ok(control) = self.rotation_rx.try_recv() {
            match control {
                RotationControl::Reset => {
                    if let Some(rotation) = &self.rotation {
                        rotation.reset();
                    }
                }
            }
        }

        let mut resizes = Vec::new();
        while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
            resizes.push((width, height));
        }
        let resized = !resizes.is_empty();
        if let Some((width, height)) = Coalescer::decide_resize(None, &resizes) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            self.last_size = Some((width, height));
        }

        let mut render_requests = 0;
        while self.render_req_rx.try_recv().is_ok() {
            render_requests += 1;
        }
        if Coalescer::decide_render(render_requests, saw_tui_render, resized) {
            self.render().await?;
        }
        Ok(())
    }

    /// Wait for a terminal event or a rotation tick; returns whether the
    /// terminal asked for a frame
    async fn wait_for_input(&mut self) -> bool {
        let event = tokio::select! {
            biased;
            event = self.event_source.next() => event,
            _ = self.runtime.recv_raw() => None,
        };

        let Some(event) = event else {
            return false;
        };
        match event {
            tui::Event::Render => return true,
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event stream failed".into())),
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => {}
        }
        false
    }

    /// Stop the timer while the process is stopped, then pick up where we left off
    async fn suspend(&mut self) -> Result<()> {
        if let Some(rotation) = &mut self.rotation {
            rotation.teardown();
        }
        self.runtime.detach_rotation();
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.enter()?;
        }

        self.runtime.send_raw_msg(RawMsg::Resume);
        self.queue_current_size().await?;
        let rotation = RotationService::new(self.cadence, self.runtime.get_raw_sender()).start();
        self.runtime.attach_rotation(rotation.watch());
        self.rotation = Some(rotation);
        log::info!("Resumed; rotation restarted");
        Ok(())
    }

    async fn queue_current_size(&mut self) -> Result<()> {
        let size = self.tui.lock().await.size()?;
        if self.last_size != Some((size.width, size.height)) {
            self.runtime
                .send_raw_msg(RawMsg::Resize(size.width, size.height));
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
