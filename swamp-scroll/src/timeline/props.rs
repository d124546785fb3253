use std::collections::BTreeMap;
use std::fmt;

/// Keys from an object's root down to one number prop, e.g. `position.x`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropPath(Vec<String>);

impl PropPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Key used by saved state to map props to tracks: a compact JSON array.
    pub fn track_key(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }

    /// Follow the path through a nested override document.
    pub fn lookup(&self, root: &serde_json::Value) -> Option<f64> {
        self.0
            .iter()
            .try_fold(root, |node, segment| node.get(segment))?
            .as_f64()
    }
}

impl fmt::Display for PropPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberProp {
    pub path: PropPath,
    pub default: f64,
    /// Authoring range hint. Values outside it are passed through untouched.
    pub range: Option<(f64, f64)>,
}

/// Declared props of a sheet object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectConfig {
    props: Vec<NumberProp>,
}

impl ObjectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, path: PropPath, default: f64, range: Option<(f64, f64)>) -> Self {
        self.props.push(NumberProp {
            path,
            default,
            range,
        });
        self
    }

    /// Group of number props under a shared key, such as an x/y/z triple.
    pub fn compound(
        mut self,
        key: &str,
        fields: &[(&str, f64)],
        range: Option<(f64, f64)>,
    ) -> Self {
        for (field, default) in fields {
            self = self.number(PropPath::new([key, *field]), *default, range);
        }
        self
    }

    pub fn props(&self) -> &[NumberProp] {
        &self.props
    }
}

/// Evaluated prop values of an object at one sequence position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropValues(BTreeMap<PropPath, f64>);

impl PropValues {
    pub fn insert(&mut self, path: PropPath, value: f64) {
        self.0.insert(path, value);
    }

    pub fn get(&self, path: &[&str]) -> Option<f64> {
        self.0.get(&PropPath::new(path.iter().copied())).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
