//! Exported function table.
//!
//! The host resolves a native call by module, function name and arity. A
//! [`NifTable`] holds the entry points of one host module keyed by
//! `(name, arity)` and turns every failure into an `{error, Reason}` term.

use exmatrix_backend::{
    api::{BufferAlloc, DotProduct, ModuleNew},
    layouts::{Backend, Module},
};
use exmatrix_utils::map::Map;
use tracing::{debug, instrument, warn};

use crate::{
    boundary::{dot_product_f64, dot_product_i32},
    config::ConvertOptions,
    convert::IntoTerm,
    error::DotError,
    host::HostEnv,
};

/// Host module the dot product entry points are exported under.
pub const MODULE_NAME: &str = "Elixir.ExMatrix.NIF";

pub type NifHandler<H> =
    fn(&mut H, &ConvertOptions, &[<H as HostEnv>::Term]) -> Result<<H as HostEnv>::Term, DotError>;

pub struct NifFunc<H: HostEnv> {
    pub name: &'static str,
    pub arity: usize,
    pub fun: NifHandler<H>,
}

impl<H: HostEnv> Clone for NifFunc<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: HostEnv> Copy for NifFunc<H> {}

impl<H: HostEnv> std::fmt::Debug for NifFunc<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

pub struct NifTable<H: HostEnv> {
    module: &'static str,
    funcs: Map<(String, usize), NifFunc<H>>,
    options: ConvertOptions,
}

impl<H: HostEnv> NifTable<H> {
    pub fn new(module: &'static str) -> Self {
        Self {
            module,
            funcs: Map::new(),
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// The `Elixir.ExMatrix.NIF` table: `_dotproduct/2` over `i32` and
    /// `_dotproduct_float/2` over `f64`, both computed on backend `B`.
    pub fn exmatrix<B>() -> Self
    where
        B: Backend,
        Module<B>: ModuleNew<B> + BufferAlloc + DotProduct<i32> + DotProduct<f64>,
    {
        let mut table: Self = Self::new(MODULE_NAME);
        table.register(NifFunc {
            name: "_dotproduct",
            arity: 2,
            fun: nif_dotproduct::<H, B>,
        });
        table.register(NifFunc {
            name: "_dotproduct_float",
            arity: 2,
            fun: nif_dotproduct_float::<H, B>,
        });
        table
    }

    /// Adds `func`, returning the entry it replaced under the same name and arity.
    pub fn register(&mut self, func: NifFunc<H>) -> Option<NifFunc<H>> {
        self.funcs.insert((func.name.to_owned(), func.arity), func)
    }

    pub fn lookup(&self, name: &str, arity: usize) -> Option<&NifFunc<H>> {
        self.funcs.get(&(name.to_owned(), arity))
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Registered `(name, arity)` pairs, sorted.
    pub fn functions(&self) -> Vec<(&str, usize)> {
        let mut funcs: Vec<(&str, usize)> = self
            .funcs
            .keys()
            .map(|(name, arity)| (name.as_str(), *arity))
            .collect();
        funcs.sort_unstable();
        funcs
    }

    #[instrument(level = "debug", skip(self, env, args), fields(module = self.module, arity = args.len()))]
    pub fn call(&self, env: &mut H, name: &str, args: &[H::Term]) -> Result<H::Term, DotError> {
        let func: &NifFunc<H> = self
            .lookup(name, args.len())
            .ok_or_else(|| DotError::UndefinedFunction {
                name: name.to_owned(),
                arity: args.len(),
            })?;
        debug!(?func, "dispatch");
        (func.fun)(env, &self.options, args)
    }

    /// Like [`NifTable::call`], with errors returned as `{error, Reason}`.
    pub fn call_encoded(&self, env: &mut H, name: &str, args: &[H::Term]) -> H::Term {
        match self.call(env, name, args) {
            Ok(term) => term,
            Err(err) => {
                warn!(module = self.module, name, %err, "call failed");
                encode_error(env, &err)
            }
        }
    }
}

/// `{error, Reason}` for `err`.
///
/// `Reason` is a bare atom for allocation, arity and lookup failures and a
/// tuple tagged with [`DotError::reason`] when the error carries positions.
pub fn encode_error<H: HostEnv>(env: &mut H, err: &DotError) -> H::Term {
    let tag: H::Term = env.make_atom(err.reason());
    let reason: H::Term = match err {
        DotError::DimensionMismatch { left, right } => {
            let left: H::Term = env.make_i64(*left as i64);
            let right: H::Term = env.make_i64(*right as i64);
            env.make_tuple(&[tag, left, right])
        }
        DotError::Conversion(conv) => {
            let pos: H::Term = env.make_i64(conv.position() as i64);
            env.make_tuple(&[tag, pos])
        }
        DotError::NotAList { argument } => {
            let arg: H::Term = env.make_i64(*argument as i64);
            env.make_tuple(&[tag, arg])
        }
        DotError::Allocation { .. } | DotError::BadArity { .. } | DotError::UndefinedFunction { .. } => tag,
    };
    let error: H::Term = env.make_atom("error");
    env.make_tuple(&[error, reason])
}

fn nif_dotproduct<H, B>(env: &mut H, opts: &ConvertOptions, args: &[H::Term]) -> Result<H::Term, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: ModuleNew<B> + BufferAlloc + DotProduct<i32>,
{
    let &[a, b] = args else {
        return Err(DotError::BadArity {
            expected: 2,
            got: args.len(),
        });
    };
    let module: Module<B> = Module::<B>::new();
    let res: i32 = dot_product_i32(env, &module, a, b, opts)?;
    Ok(res.into_term(env))
}

fn nif_dotproduct_float<H, B>(env: &mut H, opts: &ConvertOptions, args: &[H::Term]) -> Result<H::Term, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: ModuleNew<B> + BufferAlloc + DotProduct<f64>,
{
    let &[a, b] = args else {
        return Err(DotError::BadArity {
            expected: 2,
            got: args.len(),
        });
    };
    let module: Module<B> = Module::<B>::new();
    let res: f64 = dot_product_f64(env, &module, a, b, opts)?;
    Ok(res.into_term(env))
}
