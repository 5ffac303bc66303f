//! SDK entry points and builder for composing the tensor explorer app.

use bevy::log::info;
use bevy::prelude::*;

use crate::camera::camera_plugin;
use crate::config::{self, ExplorerConfig};
use crate::data::{ActivationSettings, ActivationSource, TensorShape};
use crate::highlight::highlight_plugin;
use crate::picking::{picking_plugin, HoveredCell, PointerOverUi};
use crate::render::{CellsAndGhostsRenderer, RendererResource, TensorRenderer};
use crate::scene::{edge_plugin, rebuild_scene, setup_scene, CellRegistry, SceneSummary};
use crate::schedule::{configure_explorer_sets, ExplorerSet};
use crate::state::{apply_control_commands, ControlChannel, ExplorerState};
use crate::ui::{egui_plugin, panel_plugin, shortcut_plugin, tooltip_plugin};

/// Builder for a Tensorscope app. Explicit settings win over `env_config`.
pub struct TensorExplorerBuilder {
    use_env: bool,
    shape: Option<TensorShape>,
    explode: Option<f32>,
    activations: Option<ActivationSource>,
    renderer: Option<Box<dyn TensorRenderer>>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_panel: bool,
    enable_tooltip: bool,
    enable_edges: bool,
}

impl Default for TensorExplorerBuilder {
    fn default() -> Self {
        Self {
            use_env: false,
            shape: None,
            explode: None,
            activations: None,
            renderer: None,
            window_title: "Tensorscope".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.04, 0.05, 0.08),
            enable_panel: true,
            enable_tooltip: true,
            enable_edges: true,
        }
    }
}

impl TensorExplorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the initial shape, explode factor and activations from `TENSOR_*`.
    pub fn env_config(mut self) -> Self {
        self.use_env = true;
        self
    }

    pub fn shape(mut self, shape: TensorShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn explode(mut self, explode: f32) -> Self {
        self.explode = Some(explode);
        self
    }

    pub fn activations(mut self, source: ActivationSource) -> Self {
        self.activations = Some(source);
        self
    }

    /// Provide a custom tensor renderer implementation.
    pub fn renderer(mut self, renderer: impl TensorRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_panel(mut self) -> Self {
        self.enable_panel = false;
        self
    }

    pub fn disable_tooltip(mut self) -> Self {
        self.enable_tooltip = false;
        self
    }

    pub fn disable_edges(mut self) -> Self {
        self.enable_edges = false;
        self
    }

    /// Resolved startup settings: environment first, then explicit overrides.
    pub fn resolved_config(&self) -> ExplorerConfig {
        let mut config = if self.use_env {
            config::explorer_config()
        } else {
            ExplorerConfig::default()
        };
        if let Some(shape) = self.shape {
            config.shape = shape;
        }
        if let Some(explode) = self.explode {
            config.explode = explode;
        }
        if let Some(source) = &self.activations {
            config.activations = source.clone();
        }
        config
    }

    /// Registers state, scene, picking, highlight, and camera systems on an
    /// existing app. Needs no window, egui, or gizmos, so it also runs under
    /// `MinimalPlugins`.
    pub fn install(self, app: &mut App) {
        let config = self.resolved_config();
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(CellsAndGhostsRenderer::default()));
        info!(
            shape = %config.shape,
            explode = config.explode,
            "starting tensor explorer"
        );

        configure_explorer_sets(app);
        app.insert_resource(ExplorerState::new(config.shape, config.explode))
            .insert_resource(ActivationSettings(config.activations))
            .init_resource::<ControlChannel>()
            .init_resource::<CellRegistry>()
            .init_resource::<SceneSummary>()
            .init_resource::<HoveredCell>()
            .init_resource::<PointerOverUi>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    apply_control_commands.in_set(ExplorerSet::Dispatch),
                    rebuild_scene.in_set(ExplorerSet::Rebuild),
                ),
            )
            .add_plugins((camera_plugin, picking_plugin, highlight_plugin, shortcut_plugin));

        renderer.setup(app);
        app.insert_resource(RendererResource(renderer));
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title.clone(),
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color));

        let enable_panel = self.enable_panel;
        let enable_tooltip = self.enable_tooltip;
        let enable_edges = self.enable_edges;
        self.install(&mut app);

        if enable_panel || enable_tooltip {
            app.add_plugins(egui_plugin);
        }
        if enable_panel {
            app.add_plugins(panel_plugin);
        }
        if enable_tooltip {
            app.add_plugins(tooltip_plugin);
        }
        if enable_edges {
            app.add_plugins(edge_plugin);
        }

        app
    }
}
