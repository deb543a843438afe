//! Compile-and-run convenience for embedders.

use hotscript_compiler::{CompilationResult, CompiledMethod, CompilerOptions};
use hotscript_core::{
    CompilationError, Environment, HotscriptError, RegistrationError, RuntimeError, Value,
};
use hotscript_ir::MethodDecl;
use hotscript_registry::{PropertyDescriptor, PropertyLookup, PropertyRegistry, PropertyResolver};
use hotscript_vm::{DynamicStore, ExecutionContext, Frame, Vm, VmOptions};

/// Registry, resolver, options and runtime state in one place.
///
/// Compiled methods run against the runtime's own dynamic store and
/// environment, so state carries over between runs.
pub struct Runtime {
    registry: PropertyRegistry,
    resolver: Option<Box<dyn PropertyResolver>>,
    options: CompilerOptions,
    vm: Vm,
    context: ExecutionContext,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// A runtime with the built-in properties and default options.
    pub fn new() -> Self {
        Self::with_registry(PropertyRegistry::with_builtins())
    }

    pub fn with_registry(registry: PropertyRegistry) -> Self {
        Self {
            registry,
            resolver: None,
            options: CompilerOptions::default(),
            vm: Vm::default(),
            context: ExecutionContext::default(),
        }
    }

    /// Consult `resolver` before the registry when resolving properties.
    pub fn with_resolver(mut self, resolver: impl PropertyResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn with_options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_vm_options(mut self, options: VmOptions) -> Self {
        self.vm = Vm::new(options);
        self
    }

    pub fn with_environment(mut self, env: Environment) -> Self {
        self.context.env = env;
        self
    }

    /// Register an additional property.
    pub fn register(&mut self, descriptor: PropertyDescriptor) -> Result<(), RegistrationError> {
        self.registry.register(descriptor)
    }

    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Property lookup as the compiler sees it.
    pub fn lookup(&self) -> PropertyLookup<'_> {
        let lookup = PropertyLookup::new(&self.registry);
        match &self.resolver {
            Some(resolver) => lookup.with_resolver(resolver.as_ref()),
            None => lookup,
        }
    }

    pub fn compile(&self, method: &MethodDecl<'_>) -> Result<CompiledMethod, CompilationError> {
        hotscript_compiler::compile_method(method, self.lookup(), &self.options)
    }

    pub fn compile_unit(&self, methods: &[MethodDecl<'_>]) -> CompilationResult {
        hotscript_compiler::compile_unit(methods, self.lookup(), &self.options)
    }

    /// Run a compiled method against this runtime's store and environment.
    pub fn run(&mut self, method: &CompiledMethod, args: Vec<Value>) -> Result<Frame, RuntimeError> {
        self.vm.execute(method, &mut self.context, args)
    }

    /// Compile and run in one step.
    pub fn execute(&mut self, method: &MethodDecl<'_>, args: Vec<Value>) -> Result<Frame, HotscriptError> {
        let compiled = self.compile(method)?;
        Ok(self.run(&compiled, args)?)
    }

    pub fn store(&self) -> &DynamicStore {
        &self.context.store
    }

    pub fn store_mut(&mut self) -> &mut DynamicStore {
        &mut self.context.store
    }

    pub fn env(&self) -> &Environment {
        &self.context.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.context.env
    }
}
