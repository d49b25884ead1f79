//! Flat storage for expression and block nodes.

// Rc is the intentional implementation detail of SharedArena: closures
// created under one parse keep their defining arena alive across later
// parses in the same session (REPL lines).
use std::fmt;
use std::rc::Rc;

use super::{Block, Expr};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a block in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct BlockId(u32);

impl BlockId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

/// Arena owning every expression and block node of one parse.
///
/// Ids handed out by `alloc_*` are valid only against the arena that
/// produced them.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    blocks: Vec<Block>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena {
            exprs: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Allocate an expression node.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX nodes"));
        self.exprs.push(expr);
        ExprId(id)
    }

    /// Allocate a block node.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` blocks.
    pub fn alloc_block(&mut self, block: Block) -> BlockId {
        let id = u32::try_from(self.blocks.len())
            .unwrap_or_else(|_| panic!("block arena exceeded u32::MAX nodes"));
        self.blocks.push(block);
        BlockId(id)
    }

    /// Get an expression by id.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get a block by id.
    #[inline]
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Number of allocated expressions.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of allocated blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Reference-counted handle to a finished arena.
///
/// Function values hold one of these so their body ids stay resolvable
/// for as long as any closure created from the parse is alive.
#[derive(Clone)]
pub struct SharedArena(Rc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Rc::new(arena))
    }

    /// Identity comparison: do two handles share one arena?
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SharedArena({} exprs, {} blocks)",
            self.expr_count(),
            self.block_count()
        )
    }
}
