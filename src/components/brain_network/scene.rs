//! Rendering target for the diagram.
//!
//! The diagram only ever creates primitives, tweaks their attributes and
//! classes, reads attributes back, and removes them. [`Scene`] captures that
//! surface so the layout and effects run against a test double as well as
//! the SVG DOM.

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Draw-order groups, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneLayer {
	/// Connection lines.
	Edges,
	/// Weight labels.
	Labels,
	/// Node circles.
	Nodes,
	/// Particles and ripples.
	Overlay,
}

impl SceneLayer {
	/// Every layer, back to front.
	pub const ALL: [SceneLayer; 4] = [
		SceneLayer::Edges,
		SceneLayer::Labels,
		SceneLayer::Nodes,
		SceneLayer::Overlay,
	];

	fn group_class(self) -> &'static str {
		match self {
			SceneLayer::Edges => "connections",
			SceneLayer::Labels => "weight-labels",
			SceneLayer::Nodes => "nodes",
			SceneLayer::Overlay => "effects",
		}
	}
}

/// A vector scene the diagram draws into.
pub trait Scene {
	/// Reference to a drawn primitive.
	type Handle: Clone;

	/// Draw a circle in `layer`.
	fn circle(&mut self, layer: SceneLayer, cx: f64, cy: f64, r: f64, class: &str)
	-> Option<Self::Handle>;

	/// Draw a straight line in `layer`.
	fn line(
		&mut self,
		layer: SceneLayer,
		from: (f64, f64),
		to: (f64, f64),
		class: &str,
	) -> Option<Self::Handle>;

	/// Draw a centered text run in `layer`.
	fn text(&mut self, layer: SceneLayer, x: f64, y: f64, content: &str, class: &str)
	-> Option<Self::Handle>;

	/// Set an attribute on a drawn primitive.
	fn set_attr(&mut self, handle: &Self::Handle, name: &str, value: &str);

	/// Read an attribute back from a drawn primitive.
	fn attr(&self, handle: &Self::Handle, name: &str) -> Option<String>;

	/// Add a class to a drawn primitive.
	fn add_class(&mut self, handle: &Self::Handle, class: &str);

	/// Remove a class from a drawn primitive.
	fn remove_class(&mut self, handle: &Self::Handle, class: &str);

	/// Remove a primitive. Removing it again is a no-op.
	fn remove(&mut self, handle: &Self::Handle);

	/// Remove everything the scene created.
	fn clear(&mut self);

	/// Set a numeric attribute.
	fn set_num(&mut self, handle: &Self::Handle, name: &str, value: f64) {
		self.set_attr(handle, name, &value.to_string());
	}

	/// Read a numeric attribute back.
	fn num(&self, handle: &Self::Handle, name: &str) -> Option<f64> {
		self.attr(handle, name)?.trim().parse().ok()
	}
}

/// [`Scene`] backed by an `<svg>` element appended to a container.
pub struct SvgScene {
	document: Document,
	root: Element,
	groups: [Element; 4],
}

impl SvgScene {
	/// Create the `<svg>` and its layer groups inside `container`.
	pub fn new(container: &Element, width: f64, height: f64) -> Result<Self, JsValue> {
		let document = container
			.owner_document()
			.ok_or_else(|| JsValue::from_str("container has no owner document"))?;

		let root = document.create_element_ns(Some(SVG_NS), "svg")?;
		root.set_attribute("class", "network-svg")?;
		root.set_attribute("viewBox", &format!("0 0 {} {}", width, height))?;
		root.set_attribute("preserveAspectRatio", "xMidYMid meet")?;
		root.set_attribute("role", "img")?;
		root.set_attribute("aria-label", "Animated neural network illustration")?;

		let make_group = |layer: SceneLayer| -> Result<Element, JsValue> {
			let group = document.create_element_ns(Some(SVG_NS), "g")?;
			group.set_attribute("class", layer.group_class())?;
			root.append_child(&group)?;
			Ok(group)
		};
		let groups = [
			make_group(SceneLayer::Edges)?,
			make_group(SceneLayer::Labels)?,
			make_group(SceneLayer::Nodes)?,
			make_group(SceneLayer::Overlay)?,
		];

		container.append_child(&root)?;
		Ok(Self {
			document,
			root,
			groups,
		})
	}

	fn group(&self, layer: SceneLayer) -> &Element {
		match layer {
			SceneLayer::Edges => &self.groups[0],
			SceneLayer::Labels => &self.groups[1],
			SceneLayer::Nodes => &self.groups[2],
			SceneLayer::Overlay => &self.groups[3],
		}
	}

	fn create(&self, layer: SceneLayer, tag: &str, attrs: &[(&str, String)]) -> Option<Element> {
		let build = || -> Result<Element, JsValue> {
			let element = self.document.create_element_ns(Some(SVG_NS), tag)?;
			for (name, value) in attrs {
				element.set_attribute(name, value)?;
			}
			self.group(layer).append_child(&element)?;
			Ok(element)
		};
		match build() {
			Ok(element) => Some(element),
			Err(e) => {
				warn!("portfolio: failed to create <{}>: {:?}", tag, e);
				None
			}
		}
	}
}

impl Scene for SvgScene {
	type Handle = Element;

	fn circle(&mut self, layer: SceneLayer, cx: f64, cy: f64, r: f64, class: &str) -> Option<Element> {
		self.create(
			layer,
			"circle",
			&[
				("cx", cx.to_string()),
				("cy", cy.to_string()),
				("r", r.to_string()),
				("class", class.to_string()),
			],
		)
	}

	fn line(&mut self, layer: SceneLayer, from: (f64, f64), to: (f64, f64), class: &str) -> Option<Element> {
		self.create(
			layer,
			"line",
			&[
				("x1", from.0.to_string()),
				("y1", from.1.to_string()),
				("x2", to.0.to_string()),
				("y2", to.1.to_string()),
				("class", class.to_string()),
			],
		)
	}

	fn text(&mut self, layer: SceneLayer, x: f64, y: f64, content: &str, class: &str) -> Option<Element> {
		let element = self.create(
			layer,
			"text",
			&[
				("x", x.to_string()),
				("y", y.to_string()),
				("class", class.to_string()),
			],
		)?;
		element.set_text_content(Some(content));
		Some(element)
	}

	fn set_attr(&mut self, handle: &Element, name: &str, value: &str) {
		let _ = handle.set_attribute(name, value);
	}

	fn attr(&self, handle: &Element, name: &str) -> Option<String> {
		handle.get_attribute(name)
	}

	fn add_class(&mut self, handle: &Element, class: &str) {
		let _ = handle.class_list().add_1(class);
	}

	fn remove_class(&mut self, handle: &Element, class: &str) {
		let _ = handle.class_list().remove_1(class);
	}

	fn remove(&mut self, handle: &Element) {
		handle.remove();
	}

	fn clear(&mut self) {
		for layer in SceneLayer::ALL {
			self.group(layer).set_inner_html("");
		}
		self.root.remove();
	}
}
