use dashmap::DashMap;
use sutra_domain::{DomainError, FlowRule, FlowRuleRow};

/// Rule Store visto desde el motor.
///
/// El motor sólo llama a `snapshot` (una vez por proyección); las escrituras
/// existen para la capa CRUD y son la frontera de validación. El aislamiento
/// multi-tenant lo da la clave `tenant`.
pub trait RuleStore: Send + Sync {
    /// Copia de las reglas del tenant, en orden de inserción.
    fn snapshot(&self, tenant: &str) -> Vec<FlowRule>;

    /// Valida la fila y la agrega. Rechaza `tatType` desconocidos y una
    /// segunda regla de inicio para el mismo sistema.
    fn insert(&self, tenant: &str, row: FlowRuleRow) -> Result<(), DomainError>;

    /// Elimina todas las reglas de un sistema; devuelve cuántas se borraron.
    fn remove_system(&self, tenant: &str, system: &str) -> usize;
}

/// Implementación en memoria, segura para lectores y escritores concurrentes.
#[derive(Debug, Default)]
pub struct InMemoryRuleStore {
    inner: DashMap<String, Vec<FlowRule>>,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carga un conjunto de reglas ya tipadas, validando cada una como si
    /// llegara por `insert`.
    pub fn with_rules(tenant: &str, rules: Vec<FlowRule>) -> Result<Self, DomainError> {
        let store = Self::new();
        for rule in rules {
            store.insert(tenant, rule.into())?;
        }
        Ok(store)
    }

    pub fn tenants(&self) -> Vec<String> {
        let mut out: Vec<String> = self.inner.iter().map(|e| e.key().clone()).collect();
        out.sort();
        out
    }
}

impl RuleStore for InMemoryRuleStore {
    fn snapshot(&self, tenant: &str) -> Vec<FlowRule> {
        self.inner.get(tenant).map(|rules| rules.value().clone()).unwrap_or_default()
    }

    fn insert(&self, tenant: &str, row: FlowRuleRow) -> Result<(), DomainError> {
        let rule = FlowRule::try_from(row).inspect_err(|e| log::warn!("fila rechazada para tenant '{tenant}': {e}"))?;
        // el guard de la entrada serializa escrituras del mismo tenant
        let mut rules = self.inner.entry(tenant.to_string()).or_default();
        if rule.is_start() && rules.iter().any(|r| r.is_start() && r.system() == rule.system()) {
            log::warn!("regla de inicio duplicada para '{}' (tenant '{tenant}')", rule.system());
            return Err(DomainError::DuplicateStartRule(rule.system().to_string()));
        }
        rules.push(rule);
        Ok(())
    }

    fn remove_system(&self, tenant: &str, system: &str) -> usize {
        match self.inner.get_mut(tenant) {
            Some(mut rules) => {
                let before = rules.len();
                rules.retain(|r| r.system() != system);
                before - rules.len()
            }
            None => 0,
        }
    }
}
