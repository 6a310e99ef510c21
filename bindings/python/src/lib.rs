//! Python bindings for the algorithms crate.

use pyo3::exceptions::{PyIndexError, PyKeyError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyInt, PyList, PyMapping, PySequence, PySet, PyString, PyTuple};
use std::cmp::Ordering;

use ::algorithms::internals::engine::executor::SortExecutor;
use ::algorithms::prelude::{
    Adjacency, AlgorithmError, Bfs, Comparator, Incomparable, Sample, SequenceView,
    SortAlgorithm, Validator, VisitedSet, min_max_by,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert an AlgorithmError to a PyErr
fn to_py_error(e: AlgorithmError) -> PyErr {
    match e {
        AlgorithmError::NotIterable { .. }
        | AlgorithmError::TypeMismatch { .. }
        | AlgorithmError::PositionalArgument { .. }
        | AlgorithmError::UnsupportedKeyword { .. }
        | AlgorithmError::Unorderable { .. } => PyTypeError::new_err(e.to_string()),
        AlgorithmError::OutOfRange { .. } | AlgorithmError::InvertedRange { .. } => {
            PyIndexError::new_err(e.to_string())
        }
        AlgorithmError::InvalidSampleSize(_)
        | AlgorithmError::PopulationTooSmall { .. }
        | AlgorithmError::EmptyInput { .. } => PyValueError::new_err(e.to_string()),
    }
}

/// Name of the type of a Python object
fn type_name(value: &Bound<'_, PyAny>) -> String {
    value
        .get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "object".to_owned())
}

/// Check positional count and keyword names of a call
fn check_call(
    function: &'static str,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
    positional: usize,
    allowed: &[&str],
) -> PyResult<()> {
    Validator::validate_positional(function, positional, args.len()).map_err(to_py_error)?;
    if let Some(kwargs) = kwargs {
        let keywords = kwargs
            .keys()
            .iter()
            .map(|key| key.extract::<String>())
            .collect::<PyResult<Vec<_>>>()?;
        Validator::validate_keywords(function, keywords.iter().map(String::as_str), allowed)
            .map_err(to_py_error)?;
    }
    Ok(())
}

/// Look up a keyword argument
fn kwarg<'py>(kwargs: Option<&Bound<'py, PyDict>>, name: &str) -> PyResult<Option<Bound<'py, PyAny>>> {
    match kwargs {
        Some(kwargs) => kwargs.get_item(name),
        None => Ok(None),
    }
}

/// Extract a Python int, saturating values beyond 128 bits
fn extract_int(argument: &'static str, value: &Bound<'_, PyAny>) -> PyResult<i128> {
    if !value.is_instance_of::<PyInt>() {
        return Err(to_py_error(AlgorithmError::TypeMismatch {
            argument,
            expected: "an integer",
            got: type_name(value),
        }));
    }
    match value.extract::<i128>() {
        Ok(int) => Ok(int),
        Err(_) if value.lt(0)? => Ok(i128::MIN),
        Err(_) => Ok(i128::MAX),
    }
}

/// Extract an optional integer keyword, treating `None` as omitted
fn optional_int(argument: &'static str, value: Option<Bound<'_, PyAny>>) -> PyResult<Option<i128>> {
    match value {
        Some(value) if !value.is_none() => extract_int(argument, &value).map(Some),
        _ => Ok(None),
    }
}

/// Collect any iterable into a vector of its items
fn materialize<'py>(value: &Bound<'py, PyAny>) -> PyResult<Vec<Bound<'py, PyAny>>> {
    if let Ok(list) = value.downcast::<PyList>() {
        return Ok(list.iter().collect());
    }
    let iter = value.try_iter().map_err(|_| {
        to_py_error(AlgorithmError::NotIterable {
            type_name: type_name(value),
        })
    })?;
    iter.collect()
}

// ============================================================================
// Host Adapters
// ============================================================================

/// Orders Python objects by rich comparison, keeping the first raised error.
#[derive(Default)]
struct HostOrder {
    error: Option<PyErr>,
}

impl HostOrder {
    /// The exception to raise for a failed call
    fn raise(&mut self, e: AlgorithmError) -> PyErr {
        match (e, self.error.take()) {
            (AlgorithmError::Unorderable { .. }, Some(err)) => err,
            (e, _) => to_py_error(e),
        }
    }
}

impl<'py> Comparator<Bound<'py, PyAny>> for HostOrder {
    fn compare(&mut self, a: &Bound<'py, PyAny>, b: &Bound<'py, PyAny>) -> Result<Ordering, Incomparable> {
        a.compare(b).map_err(|err| {
            let reason = err.to_string();
            self.error = Some(err);
            Incomparable::new(reason)
        })
    }
}

/// A Python mapping read as an adjacency mapping.
struct HostGraph {
    mapping: Py<PyAny>,
}

impl Adjacency for HostGraph {
    type Node = Py<PyAny>;
    type Error = PyErr;

    fn neighbors(&self, node: &Py<PyAny>) -> PyResult<Option<Vec<Py<PyAny>>>> {
        Python::with_gil(|py| match self.mapping.bind(py).get_item(node.bind(py)) {
            Ok(value) => value
                .try_iter()?
                .map(|neighbor| neighbor.map(Bound::unbind))
                .collect::<PyResult<Vec<_>>>()
                .map(Some),
            Err(err) if err.is_instance_of::<PyKeyError>(py) => Ok(None),
            Err(err) => Err(err),
        })
    }

    fn first_key(&self) -> PyResult<Option<Py<PyAny>>> {
        Python::with_gil(|py| {
            let mut keys = self.mapping.bind(py).try_iter()?;
            keys.next().transpose().map(|key| key.map(Bound::unbind))
        })
    }
}

/// A Python set, so node identity follows Python hashing and equality.
struct HostVisited {
    set: Py<PySet>,
}

impl VisitedSet<Py<PyAny>> for HostVisited {
    type Error = PyErr;

    fn insert(&mut self, node: &Py<PyAny>) -> PyResult<bool> {
        Python::with_gil(|py| {
            let set = self.set.bind(py);
            let node = node.bind(py);
            if set.contains(node)? {
                return Ok(false);
            }
            set.add(node)?;
            Ok(true)
        })
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort a Python sequence with `algorithm` and return the result in kind.
///
/// Lists are sorted in place and returned; only `[first, last)` is written
/// back, and only once the sort succeeded. Tuples and strings produce a new
/// tuple or string, every other iterable a new list.
fn sort_with<'py>(
    algorithm: SortAlgorithm,
    args: &Bound<'py, PyTuple>,
    kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyAny>> {
    let py = args.py();
    check_call(algorithm.name(), args, kwargs, 1, &["first", "last"])?;

    let first = optional_int("first", kwarg(kwargs, "first")?)?;
    let last = optional_int("last", kwarg(kwargs, "last")?)?;
    let first = first
        .map(|i| Validator::validate_non_negative("first", i))
        .transpose()
        .map_err(to_py_error)?;
    let last = last
        .map(|i| Validator::validate_non_negative("last", i))
        .transpose()
        .map_err(to_py_error)?;

    let sequence = args.get_item(0)?;
    let mut items = materialize(&sequence)?;
    let range = Validator::validate_range(items.len(), first, last).map_err(to_py_error)?;

    let mut order = HostOrder::default();
    let mut view = SequenceView::with_range(&mut items, range.clone()).map_err(to_py_error)?;
    SortExecutor::run(algorithm, &mut view, &mut order, None).map_err(|e| order.raise(e))?;

    if let Ok(list) = sequence.downcast::<PyList>() {
        for i in range {
            list.set_item(i, &items[i])?;
        }
        return Ok(sequence);
    }
    if sequence.is_instance_of::<PyTuple>() {
        return Ok(PyTuple::new(py, items)?.into_any());
    }
    if sequence.is_instance_of::<PyString>() {
        return PyString::new(py, "").call_method1("join", (PyList::new(py, items)?,));
    }
    Ok(PyList::new(py, items)?.into_any())
}

macro_rules! sort_function {
    ($name:ident, $algorithm:expr, $doc:literal) => {
        #[doc = $doc]
        #[pyfunction]
        #[pyo3(signature = (*args, **kwargs))]
        fn $name<'py>(
            args: &Bound<'py, PyTuple>,
            kwargs: Option<&Bound<'py, PyDict>>,
        ) -> PyResult<Bound<'py, PyAny>> {
            sort_with($algorithm, args, kwargs)
        }
    };
}

sort_function!(binary_insertion_sort, SortAlgorithm::BinaryInsertion, "Stable binary insertion sort.");
sort_function!(insertion_sort, SortAlgorithm::Insertion, "Stable insertion sort.");
sort_function!(heap_sort, SortAlgorithm::Heap, "Heap sort.");
sort_function!(merge_sort, SortAlgorithm::Merge, "Stable merge sort.");
sort_function!(quick_sort, SortAlgorithm::Quick, "Quicksort with median-of-three pivots.");
sort_function!(quick_sort_random, SortAlgorithm::QuickRandom, "Quicksort with random pivots.");

// ============================================================================
// Selection
// ============================================================================

/// Minimum and maximum of an iterable as a `(min, max)` tuple.
#[pyfunction]
#[pyo3(signature = (*args, **kwargs))]
fn min_max<'py>(
    args: &Bound<'py, PyTuple>,
    kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyTuple>> {
    check_call("min_max", args, kwargs, 1, &[])?;
    let items = materialize(&args.get_item(0)?)?;

    let mut order = HostOrder::default();
    let (lo, hi) = min_max_by(&items, &mut order).map_err(|e| order.raise(e))?;
    PyTuple::new(args.py(), [lo, hi])
}

// ============================================================================
// Traversal
// ============================================================================

/// Lazy breadth-first iterator over a Python mapping.
#[pyclass(name = "BfsIterator")]
pub struct PyBfs {
    inner: Bfs<HostGraph, HostVisited>,
}

#[pymethods]
impl PyBfs {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(mut slf: PyRefMut<'_, Self>) -> PyResult<Option<Py<PyAny>>> {
        slf.inner.next().transpose()
    }
}

/// Breadth-first traversal of `graph` from `root` (default: first key).
#[pyfunction]
#[pyo3(signature = (*args, **kwargs))]
fn bfs<'py>(args: &Bound<'py, PyTuple>, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<PyBfs> {
    let py = args.py();
    check_call("bfs", args, kwargs, args.len().clamp(1, 2), &["root"])?;

    let graph = args.get_item(0)?;
    if graph.downcast::<PyMapping>().is_err() {
        return Err(to_py_error(AlgorithmError::TypeMismatch {
            argument: "graph",
            expected: "a mapping",
            got: type_name(&graph),
        }));
    }

    let root = match (args.len(), kwarg(kwargs, "root")?) {
        (2, Some(_)) => {
            return Err(PyTypeError::new_err(
                "bfs() got multiple values for argument 'root'",
            ));
        }
        (2, None) => Some(args.get_item(1)?),
        (_, root) => root,
    };

    Ok(PyBfs {
        inner: Bfs::with_visited(
            HostGraph {
                mapping: graph.unbind(),
            },
            root.map(Bound::unbind),
            HostVisited {
                set: PySet::empty(py)?.unbind(),
            },
        ),
    })
}

// ============================================================================
// Sampling
// ============================================================================

/// Draw `size` distinct elements of `population` uniformly at random.
#[pyfunction]
#[pyo3(signature = (*args, **kwargs))]
fn sample<'py>(
    args: &Bound<'py, PyTuple>,
    kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyList>> {
    let py = args.py();
    check_call("sample", args, kwargs, 1, &["size", "seed"])?;

    let size = match kwarg(kwargs, "size")? {
        Some(size) => extract_int("size", &size)?,
        None => 1,
    };
    let seed = match kwarg(kwargs, "seed")? {
        Some(seed) if !seed.is_none() => Some(extract_seed(&seed)?),
        _ => None,
    };

    let size = i64::try_from(size).unwrap_or(if size < 0 { i64::MIN } else { i64::MAX });
    let mut builder = Sample::new().size(size);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let sampler = builder.build().map_err(to_py_error)?;

    let population = args.get_item(0)?;
    if let Ok(sequence) = population.downcast::<PySequence>() {
        let picked = sampler.indices(sequence.len()?).map_err(to_py_error)?;
        let items = picked.gather(|i| sequence.get_item(i))?;
        return PyList::new(py, items);
    }

    let iter = population.try_iter().map_err(|_| {
        to_py_error(AlgorithmError::NotIterable {
            type_name: type_name(&population),
        })
    })?;
    let mut reservoir = sampler.reservoir();
    for item in iter {
        reservoir.offer(item?);
    }
    PyList::new(py, reservoir.finish().map_err(to_py_error)?)
}

/// Extract a seed that fits in 64 unsigned bits
fn extract_seed(value: &Bound<'_, PyAny>) -> PyResult<u64> {
    extract_int("seed", value)?;
    value.extract::<u64>().map_err(|_| {
        to_py_error(AlgorithmError::TypeMismatch {
            argument: "seed",
            expected: "an integer in [0, 2**64)",
            got: type_name(value),
        })
    })
}

// ============================================================================
// Module
// ============================================================================

#[pymodule]
pub fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    let sort = PyModule::new(py, "sort")?;
    sort.add_function(wrap_pyfunction!(binary_insertion_sort, &sort)?)?;
    sort.add_function(wrap_pyfunction!(insertion_sort, &sort)?)?;
    sort.add_function(wrap_pyfunction!(heap_sort, &sort)?)?;
    sort.add_function(wrap_pyfunction!(merge_sort, &sort)?)?;
    sort.add_function(wrap_pyfunction!(quick_sort, &sort)?)?;
    sort.add_function(wrap_pyfunction!(quick_sort_random, &sort)?)?;
    m.add_submodule(&sort)?;

    let selection = PyModule::new(py, "selection")?;
    selection.add_function(wrap_pyfunction!(min_max, &selection)?)?;
    m.add_submodule(&selection)?;

    let graph = PyModule::new(py, "graph")?;
    graph.add_class::<PyBfs>()?;
    graph.add_function(wrap_pyfunction!(bfs, &graph)?)?;
    m.add_submodule(&graph)?;

    let random = PyModule::new(py, "random")?;
    random.add_function(wrap_pyfunction!(sample, &random)?)?;
    m.add_submodule(&random)?;

    Ok(())
}
