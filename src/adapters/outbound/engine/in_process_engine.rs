use crate::ports::inbound::Workflow;
use crate::ports::outbound::{InvocationContext, InvocationFailure, WorkflowEngine, WorkflowResult};
use crate::sbom_generation::domain::{ConfigValue, Configuration, WorkflowId};
use crate::shared::Result;
use anyhow::anyhow;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::Instrument;
use uuid::Uuid;

/// InProcessEngine adapter hosting the workflows inside this process
///
/// Cheap to clone: clones share the registry and the base configuration.
/// Every invocation runs in its own `workflow` span tagged with a fresh
/// invocation id.
#[derive(Clone)]
pub struct InProcessEngine {
    inner: Arc<EngineState>,
}

struct EngineState {
    workflows: DashMap<WorkflowId, Arc<dyn Workflow>>,
    config: RwLock<Configuration>,
}

impl InProcessEngine {
    pub fn new(config: Configuration) -> Self {
        Self {
            inner: Arc::new(EngineState {
                workflows: DashMap::new(),
                config: RwLock::new(config),
            }),
        }
    }

    /// Registers a workflow and writes its flag defaults into the base
    /// configuration, keeping values that are already set
    ///
    /// # Errors
    /// Returns an error if a workflow with the same identifier exists
    pub fn register(&self, workflow: Arc<dyn Workflow>) -> Result<()> {
        let id = workflow.identifier().clone();

        match self.inner.workflows.entry(id.clone()) {
            Entry::Occupied(_) => anyhow::bail!("workflow '{}' is already registered", id),
            Entry::Vacant(entry) => {
                let defaults: Vec<(String, ConfigValue)> = workflow
                    .flags()
                    .iter()
                    .map(|flag| (flag.name().to_string(), flag.default_value()))
                    .collect();

                let mut config = self
                    .inner
                    .config
                    .write()
                    .unwrap_or_else(PoisonError::into_inner);
                for (name, value) in defaults {
                    config.set_default(name, value);
                }

                entry.insert(workflow);
            }
        }

        tracing::debug!(workflow = %id, "registered workflow");
        Ok(())
    }

    pub fn is_registered(&self, id: &WorkflowId) -> bool {
        self.inner.workflows.contains_key(id)
    }

    /// Snapshot of the base configuration
    pub fn configuration(&self) -> Configuration {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_config(&self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(key, value);
    }

    /// Invokes a workflow with a snapshot of the base configuration
    pub async fn invoke(&self, id: &WorkflowId) -> WorkflowResult {
        self.invoke_with_config(id, self.configuration()).await
    }
}

#[async_trait]
impl WorkflowEngine for InProcessEngine {
    async fn invoke_with_config(&self, id: &WorkflowId, config: Configuration) -> WorkflowResult {
        let workflow = self
            .inner
            .workflows
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| InvocationFailure::new(anyhow!("workflow '{}' is not registered", id)))?;

        let span = tracing::info_span!("workflow", id = %id, invocation = %Uuid::new_v4());
        let ctx = InvocationContext::new(id.clone(), config, Arc::new(self.clone()));

        async move {
            tracing::info!("workflow started");
            let result = workflow.run(ctx, Vec::new()).await;
            match &result {
                Ok(data) => tracing::info!(elements = data.len(), "workflow finished"),
                Err(failure) => tracing::debug!(error = %failure, "workflow failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ExitStatusError;
    use crate::sbom_generation::domain::{
        keys, BoolFlag, DataTypeId, Flag, Payload, StringFlag, WorkflowData,
    };

    /// Echoes one configuration key back, or forwards to another workflow
    struct EchoWorkflow {
        id: WorkflowId,
        key: &'static str,
        forward_to: Option<WorkflowId>,
        flag: StringFlag,
        toggle: BoolFlag,
    }

    impl EchoWorkflow {
        fn new(name: &str, key: &'static str) -> Self {
            Self {
                id: WorkflowId::new(name),
                key,
                forward_to: None,
                flag: StringFlag::new("format", "cyclonedx1.4+json", "format"),
                toggle: BoolFlag::new("exclude-app-vulns", false, "toggle"),
            }
        }
    }

    #[async_trait]
    impl Workflow for EchoWorkflow {
        fn identifier(&self) -> &WorkflowId {
            &self.id
        }

        fn flags(&self) -> Vec<&dyn Flag> {
            vec![&self.flag, &self.toggle]
        }

        async fn run(&self, ctx: InvocationContext, _input: Vec<WorkflowData>) -> WorkflowResult {
            if let Some(target) = &self.forward_to {
                let mut config = ctx.config().clone();
                config.set(self.key, "from-outer");
                return ctx.engine().invoke_with_config(target, config).await;
            }
            if ctx.config().get_bool("fail") {
                return Err(InvocationFailure::new(ExitStatusError::new(Some(1))));
            }
            Ok(vec![WorkflowData::new(
                DataTypeId::new(self.id.clone(), "echo"),
                "text/plain",
                Payload::Text(ctx.config().get_string(self.key)),
            )])
        }
    }

    #[test]
    fn test_register_writes_flag_defaults_without_overwriting() {
        let mut base = Configuration::new();
        base.set("format", "spdx2.3+json");
        let engine = InProcessEngine::new(base);

        engine
            .register(Arc::new(EchoWorkflow::new("echo", keys::ORGANIZATION)))
            .unwrap();

        let config = engine.configuration();
        assert_eq!(config.get_string("format"), "spdx2.3+json");
        assert!(config.contains("exclude-app-vulns"));
        assert!(!config.get_bool("exclude-app-vulns"));
        assert!(engine.is_registered(&WorkflowId::new("echo")));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let engine = InProcessEngine::new(Configuration::new());
        engine
            .register(Arc::new(EchoWorkflow::new("echo", keys::ORGANIZATION)))
            .unwrap();

        let error = engine
            .register(Arc::new(EchoWorkflow::new("echo", keys::ORGANIZATION)))
            .unwrap_err();

        assert!(error.to_string().contains("already registered"));
    }

    #[tokio::test]
    async fn test_invoke_uses_base_configuration() {
        let engine = InProcessEngine::new(Configuration::new());
        engine.set_config(keys::ORGANIZATION, "my-org");
        engine
            .register(Arc::new(EchoWorkflow::new("echo", keys::ORGANIZATION)))
            .unwrap();

        let data = engine.invoke(&WorkflowId::new("echo")).await.unwrap();

        assert_eq!(data[0].payload(), &Payload::Text("my-org".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_workflow_fails() {
        let engine = InProcessEngine::new(Configuration::new());

        let failure = engine.invoke(&WorkflowId::new("missing")).await.unwrap_err();

        assert!(failure.to_string().contains("'missing' is not registered"));
    }

    #[tokio::test]
    async fn test_nested_invocation_sees_its_own_snapshot() {
        let engine = InProcessEngine::new(Configuration::new());
        engine.set_config(keys::ORGANIZATION, "base");
        let mut outer = EchoWorkflow::new("outer", keys::ORGANIZATION);
        outer.forward_to = Some(WorkflowId::new("inner"));
        engine.register(Arc::new(outer)).unwrap();
        engine
            .register(Arc::new(EchoWorkflow::new("inner", keys::ORGANIZATION)))
            .unwrap();

        let data = engine.invoke(&WorkflowId::new("outer")).await.unwrap();

        assert_eq!(data[0].payload(), &Payload::Text("from-outer".to_string()));
        assert_eq!(engine.configuration().get_string(keys::ORGANIZATION), "base");
    }

    #[tokio::test]
    async fn test_workflow_failure_is_returned() {
        let engine = InProcessEngine::new(Configuration::new());
        engine.set_config("fail", true);
        engine
            .register(Arc::new(EchoWorkflow::new("echo", keys::ORGANIZATION)))
            .unwrap();

        let failure = engine.invoke(&WorkflowId::new("echo")).await.unwrap_err();

        assert!(ExitStatusError::is_in_chain(failure.error()));
    }
}
