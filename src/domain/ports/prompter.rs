//! Operator ports - payload collection and confirmation
//!
//! The reconciler asks these traits for everything that comes from the
//! operator. The binary backs them with terminal prompts; tests script them.

use crate::domain::entities::Entity;
use crate::error::DockcraftResult;

/// What the prompter is asked to fill in
#[derive(Debug, Clone)]
pub struct EntityRequest<'a> {
    /// Key the payload will be stored under
    pub name: &'a str,
    /// Network the service joins, when the document has one
    pub network: Option<&'a str>,
    /// Current values, offered as defaults by `change`
    pub defaults: Option<&'a Entity>,
    /// First service of a networked create (the proxy)
    pub is_proxy: bool,
}

/// Produces raw entity payloads
pub trait EntityPrompter {
    /// Name for a new service. `taken` lists names already in use.
    fn service_name(&self, taken: &[String]) -> DockcraftResult<String>;

    /// Service, env record and file bundle for `request.name`.
    ///
    /// The returned keys are not trusted; the reconciler forces them.
    fn entity(&self, request: &EntityRequest<'_>) -> DockcraftResult<Entity>;

    /// Whether to keep adding services to a networked create
    fn continue_adding(&self, count: usize) -> DockcraftResult<bool>;

    /// Pick one existing service
    fn select_service(&self, names: &[String]) -> DockcraftResult<String>;

    /// Pick one of the document's networks
    fn select_network(&self, networks: &[String]) -> DockcraftResult<String>;
}

/// Yes/no gate before a mutation
pub trait Confirmer {
    fn confirm(&self, message: &str, default: bool) -> DockcraftResult<bool>;
}

/// Confirms everything. Used for `--yes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _message: &str, _default: bool) -> DockcraftResult<bool> {
        Ok(true)
    }
}

/// Declines everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl Confirmer for AssumeNo {
    fn confirm(&self, _message: &str, _default: bool) -> DockcraftResult<bool> {
        Ok(false)
    }
}

/// Prompter fed from queues, for tests
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedPrompter {
    pub names: std::cell::RefCell<std::collections::VecDeque<String>>,
    pub entities: std::cell::RefCell<std::collections::VecDeque<Entity>>,
    pub continues: std::cell::RefCell<std::collections::VecDeque<bool>>,
    pub selections: std::cell::RefCell<std::collections::VecDeque<String>>,
    /// (name, network, had defaults, is proxy) for every `entity` call
    pub requests: std::cell::RefCell<Vec<(String, Option<String>, bool, bool)>>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(self, names: &[&str]) -> Self {
        self.names
            .borrow_mut()
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_entity(self, entity: Entity) -> Self {
        self.entities.borrow_mut().push_back(entity);
        self
    }

    pub fn with_continues(self, answers: &[bool]) -> Self {
        self.continues.borrow_mut().extend(answers.iter().copied());
        self
    }

    pub fn with_selection(self, name: &str) -> Self {
        self.selections.borrow_mut().push_back(name.to_string());
        self
    }
}

#[cfg(test)]
impl EntityPrompter for ScriptedPrompter {
    fn service_name(&self, _taken: &[String]) -> DockcraftResult<String> {
        self.names
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| crate::error::DockcraftError::Prompt("no scripted name left".into()))
    }

    fn entity(&self, request: &EntityRequest<'_>) -> DockcraftResult<Entity> {
        self.requests.borrow_mut().push((
            request.name.to_string(),
            request.network.map(str::to_string),
            request.defaults.is_some(),
            request.is_proxy,
        ));
        if let Some(entity) = self.entities.borrow_mut().pop_front() {
            return Ok(entity);
        }
        if let Some(defaults) = request.defaults {
            return Ok(defaults.clone());
        }
        let flavor = if request.is_proxy {
            crate::domain::value_objects::ServerFlavor::Velocity
        } else {
            crate::domain::value_objects::ServerFlavor::Paper
        };
        Ok(Entity::scaffold(request.name, flavor, request.network))
    }

    fn continue_adding(&self, _count: usize) -> DockcraftResult<bool> {
        Ok(self.continues.borrow_mut().pop_front().unwrap_or(false))
    }

    fn select_service(&self, names: &[String]) -> DockcraftResult<String> {
        Ok(self
            .selections
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| names[0].clone()))
    }

    fn select_network(&self, networks: &[String]) -> DockcraftResult<String> {
        Ok(networks[0].clone())
    }
}

/// Confirmer answering from a queue and recording each question, for tests
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedConfirmer {
    pub answers: std::cell::RefCell<std::collections::VecDeque<bool>>,
    pub asked: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl ScriptedConfirmer {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: std::cell::RefCell::new(answers.iter().copied().collect()),
            asked: Default::default(),
        }
    }
}

#[cfg(test)]
impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, message: &str, default: bool) -> DockcraftResult<bool> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or(default))
    }
}
