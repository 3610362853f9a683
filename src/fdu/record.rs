// ABOUTME: Record of one deployed ROS2 workload instance.
// ABOUTME: Launch spec, runtime pid, auxiliary lists, and lifecycle hooks.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::FduError;
use super::lifecycle::FduLifecycle;
use super::transitions::{Transition, TransitionPolicy};
use super::unit::DeployableUnit;
use super::State;
use crate::config::Config;
use crate::descriptor::{CommandSpec, FduDescriptor};
use crate::types::{InstanceId, Pid};

/// A ROS2 workload as tracked by the orchestrator on one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ros2Fdu {
    #[serde(flatten)]
    unit: DeployableUnit,
    name: String,
    app_path: String,
    cmd: String,
    args: Vec<String>,
    outfile: PathBuf,
    namespace: Option<String>,
    virtual_interfaces: Vec<String>,
    instance_cps: Vec<String>,
    pid: Option<Pid>,
}

impl Ros2Fdu {
    /// Build a record for instance `uuid` of `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns `FduError::MissingCommand` if the descriptor has no command.
    pub fn new(
        descriptor: &FduDescriptor,
        uuid: InstanceId,
        name: impl Into<String>,
        outfile: impl Into<PathBuf>,
    ) -> Result<Self, FduError> {
        let command = descriptor
            .command
            .as_ref()
            .ok_or(FduError::MissingCommand)?;

        let record = Self {
            cmd: command.binary.clone(),
            args: command.args.clone(),
            unit: DeployableUnit::new(descriptor, uuid),
            name: name.into(),
            app_path: descriptor.image.uri.clone(),
            outfile: outfile.into(),
            namespace: None,
            virtual_interfaces: Vec::new(),
            instance_cps: Vec::new(),
            pid: None,
        };

        tracing::info!(
            uuid = %record.uuid(),
            fdu = %record.unit.fdu_id(),
            cmd = %record.cmd,
            "created ROS2 record"
        );
        Ok(record)
    }

    /// Build a record named after the descriptor, logging to the configured layout.
    ///
    /// # Errors
    ///
    /// Returns `FduError::MissingCommand` if the descriptor has no command.
    pub fn from_descriptor(
        descriptor: &FduDescriptor,
        uuid: InstanceId,
        config: &Config,
    ) -> Result<Self, FduError> {
        let outfile = config.outfile_for(&descriptor.id, &uuid);
        Self::new(descriptor, uuid, descriptor.name.clone(), outfile)
    }

    pub fn unit(&self) -> &DeployableUnit {
        &self.unit
    }

    pub fn uuid(&self) -> &InstanceId {
        self.unit.uuid()
    }

    pub fn status(&self) -> State {
        self.unit.status()
    }

    /// The command currently stored, which may differ from `cmd`/`args`
    /// after `set_cmd(None)`.
    pub fn command(&self) -> Option<&CommandSpec> {
        self.unit.command()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app_path(&self) -> &str {
        &self.app_path
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn outfile(&self) -> &Path {
        &self.outfile
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn virtual_interfaces(&self) -> &[String] {
        &self.virtual_interfaces
    }

    pub fn instance_cps(&self) -> &[String] {
        &self.instance_cps
    }

    pub fn pid(&self) -> Option<Pid> {
        self.pid
    }

    /// Pid in the orchestrator's signed form, `-1` when not running.
    pub fn pid_raw(&self) -> i64 {
        Pid::to_raw(self.pid)
    }

    pub fn is_running(&self) -> bool {
        self.status().is_running()
    }

    /// Replace the stored command. `cmd` and `args` follow only a present one.
    pub fn set_cmd(&mut self, command: Option<CommandSpec>) {
        if let Some(ref c) = command {
            self.cmd = c.binary.clone();
            self.args = c.args.clone();
        }
        self.unit.set_command(command);
    }

    pub fn set_app_path(&mut self, app_path: impl Into<String>) {
        self.app_path = app_path.into();
    }

    pub fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    pub fn add_virtual_interface(&mut self, name: impl Into<String>) {
        self.virtual_interfaces.push(name.into());
    }

    pub fn add_connection_point(&mut self, cp: impl Into<String>) {
        self.instance_cps.push(cp.into());
    }

    /// Apply a transition request through the matching hook.
    ///
    /// # Errors
    ///
    /// Under `TransitionPolicy::Strict`, returns `FduError::InvalidTransition`
    /// when the current state is not a legal predecessor. The record is left
    /// unchanged in that case.
    pub fn apply(
        &mut self,
        transition: Transition,
        policy: TransitionPolicy,
    ) -> Result<State, FduError> {
        let from = self.status();
        if policy == TransitionPolicy::Strict && !transition.is_legal_from(from) {
            return Err(FduError::InvalidTransition {
                transition: transition.label(),
                from,
                to: transition.target(),
            });
        }

        match transition {
            Transition::Define => self.on_defined(),
            Transition::Configure => self.on_configured(),
            Transition::Clean => self.on_clean(),
            Transition::Start(pid) => self.on_start(pid),
            Transition::Stop => self.on_stop(),
            Transition::Pause => self.on_pause(),
            Transition::Resume => self.on_resume(),
        }
        Ok(self.status())
    }

    fn enter(&mut self, transition: Transition) {
        let from = self.status();
        if !transition.is_legal_from(from) {
            tracing::warn!(
                uuid = %self.uuid(),
                transition = transition.label(),
                from = %from,
                "transition outside the lifecycle table"
            );
        }
        self.unit.set_status(transition.target());
    }
}

impl FduLifecycle for Ros2Fdu {
    fn on_defined(&mut self) {
        self.enter(Transition::Define);
    }

    fn on_configured(&mut self) {
        self.enter(Transition::Configure);
    }

    fn on_clean(&mut self) {
        self.enter(Transition::Clean);
    }

    fn on_start(&mut self, pid: Pid) {
        self.pid = Some(pid);
        self.enter(Transition::Start(pid));
    }

    fn on_stop(&mut self) {
        self.pid = None;
        self.enter(Transition::Stop);
    }

    fn on_pause(&mut self) {
        self.enter(Transition::Pause);
    }

    fn on_resume(&mut self) {
        self.enter(Transition::Resume);
    }
}

impl fmt::Display for Ros2Fdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UUID {} Name {} Command ", self.uuid(), self.name)?;
        match self.command() {
            Some(command) => write!(f, "{command}")?,
            None => f.write_str("none")?,
        }
        write!(f, " ARGS {:?} OUTFILE {} PID ", self.args, self.outfile.display())?;
        match self.pid {
            Some(pid) => write!(f, "{pid}")?,
            None => f.write_str("none")?,
        }
        write!(f, " SOURCE {}", self.unit.image())
    }
}
