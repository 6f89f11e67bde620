use std::fmt;

use crate::host::HostEnv;

/// Index of a value inside a [`TermHeap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term(usize);

#[derive(Clone, Debug, PartialEq)]
pub enum TermValue {
    Int(i64),
    Float(f64),
    Atom(String),
    Nil,
    Cons { head: Term, tail: Term },
    Tuple(Vec<Term>),
}

/// Append-only arena of host values.
///
/// A cons cell can only reference terms allocated before it, so every list
/// walk terminates.
#[derive(Clone, Default)]
pub struct TermHeap {
    terms: Vec<TermValue>,
}

impl TermHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Drops every term allocated after the first `len`.
    ///
    /// Handles to dropped terms become invalid and resolve to `None`.
    pub fn truncate(&mut self, len: usize) {
        self.terms.truncate(len);
    }

    pub fn value(&self, term: Term) -> Option<&TermValue> {
        self.terms.get(term.0)
    }

    fn alloc(&mut self, value: TermValue) -> Term {
        let term: Term = Term(self.terms.len());
        self.terms.push(value);
        term
    }

    pub fn int(&mut self, value: i64) -> Term {
        self.alloc(TermValue::Int(value))
    }

    pub fn float(&mut self, value: f64) -> Term {
        self.alloc(TermValue::Float(value))
    }

    pub fn atom(&mut self, name: &str) -> Term {
        self.alloc(TermValue::Atom(name.to_owned()))
    }

    pub fn nil(&mut self) -> Term {
        self.alloc(TermValue::Nil)
    }

    pub fn cons(&mut self, head: Term, tail: Term) -> Term {
        self.alloc(TermValue::Cons { head, tail })
    }

    pub fn tuple(&mut self, elems: &[Term]) -> Term {
        self.alloc(TermValue::Tuple(elems.to_vec()))
    }

    /// Builds `[e0, e1, ... | tail]`.
    pub fn improper_list(&mut self, elems: &[Term], tail: Term) -> Term {
        elems.iter().rev().fold(tail, |acc, &head| self.cons(head, acc))
    }

    pub fn list(&mut self, elems: &[Term]) -> Term {
        let nil: Term = self.nil();
        self.improper_list(elems, nil)
    }

    pub fn list_i64(&mut self, values: &[i64]) -> Term {
        let elems: Vec<Term> = values.iter().map(|&x| self.int(x)).collect();
        self.list(&elems)
    }

    pub fn list_f64(&mut self, values: &[f64]) -> Term {
        let elems: Vec<Term> = values.iter().map(|&x| self.float(x)).collect();
        self.list(&elems)
    }

    /// Renders `term` in the host's literal syntax.
    pub fn display(&self, term: Term) -> TermDisplay<'_> {
        TermDisplay { heap: self, term }
    }
}

impl HostEnv for TermHeap {
    type Term = Term;

    fn list_length(&self, term: Term) -> Option<usize> {
        let mut len: usize = 0;
        let mut cursor: Term = term;
        loop {
            match self.value(cursor)? {
                TermValue::Nil => return Some(len),
                TermValue::Cons { tail, .. } => {
                    len += 1;
                    cursor = *tail;
                }
                _ => return None,
            }
        }
    }

    fn list_cell(&self, term: Term) -> Option<(Term, Term)> {
        match self.value(term)? {
            TermValue::Cons { head, tail } => Some((*head, *tail)),
            _ => None,
        }
    }

    fn is_empty_list(&self, term: Term) -> bool {
        matches!(self.value(term), Some(TermValue::Nil))
    }

    fn is_integer(&self, term: Term) -> bool {
        matches!(self.value(term), Some(TermValue::Int(_)))
    }

    fn get_i32(&self, term: Term) -> Option<i32> {
        match self.value(term)? {
            TermValue::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }

    fn get_i64(&self, term: Term) -> Option<i64> {
        match self.value(term)? {
            TermValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn get_f64(&self, term: Term) -> Option<f64> {
        match self.value(term)? {
            TermValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn make_i32(&mut self, value: i32) -> Term {
        self.int(value as i64)
    }

    fn make_i64(&mut self, value: i64) -> Term {
        self.int(value)
    }

    fn make_f64(&mut self, value: f64) -> Term {
        self.float(value)
    }

    fn make_atom(&mut self, name: &str) -> Term {
        self.atom(name)
    }

    fn make_tuple(&mut self, elems: &[Term]) -> Term {
        self.tuple(elems)
    }
}

pub struct TermDisplay<'a> {
    heap: &'a TermHeap,
    term: Term,
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub = |term: Term| TermDisplay { heap: self.heap, term };

        match self.heap.value(self.term) {
            None => write!(f, "<invalid term {}>", self.term.0),
            Some(TermValue::Int(v)) => write!(f, "{v}"),
            Some(TermValue::Float(v)) => write!(f, "{v:?}"),
            Some(TermValue::Atom(name)) => write!(f, "{name}"),
            Some(TermValue::Nil) => write!(f, "[]"),
            Some(TermValue::Tuple(elems)) => {
                write!(f, "{{")?;
                for (i, &elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", sub(elem))?;
                }
                write!(f, "}}")
            }
            Some(TermValue::Cons { .. }) => {
                write!(f, "[")?;
                let mut cursor: Term = self.term;
                let mut first: bool = true;
                while let Some((head, tail)) = self.heap.list_cell(cursor) {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{}", sub(head))?;
                    cursor = tail;
                }
                if !self.heap.is_empty_list(cursor) {
                    write!(f, " | {}", sub(cursor))?;
                }
                write!(f, "]")
            }
        }
    }
}
