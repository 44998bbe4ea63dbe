//! Built-in Swift RIB templates.
//!
//! Used when the settings file does not name a `templateDirectory`. The set
//! mirrors the on-disk layout a user template directory must follow:
//!
//! ```text
//! OwnsView/{Builder,Interactor,Router,ViewController}.swift
//! Default/{Builder,Interactor,Router}.swift
//! ComponentExtension/ComponentExtension.swift
//! ```
//!
//! Every builder carries the dependency anchor line so that `link` works on
//! freshly generated components.

use ribgen_core::domain::{ComponentRole, TemplateKey};

/// Extension the built-in templates are written for.
pub const BUILTIN_EXTENSION: &str = "swift";

/// All built-in templates with their keys.
pub fn all_templates() -> Vec<(TemplateKey, &'static str)> {
    use ComponentRole::*;

    vec![
        (key(Builder, true), OWNS_VIEW_BUILDER),
        (key(Interactor, true), OWNS_VIEW_INTERACTOR),
        (key(Router, true), OWNS_VIEW_ROUTER),
        (key(ViewController, true), OWNS_VIEW_VIEW_CONTROLLER),
        (key(Builder, false), DEFAULT_BUILDER),
        (key(Interactor, false), DEFAULT_INTERACTOR),
        (key(Router, false), DEFAULT_ROUTER),
        (
            TemplateKey::component_extension(BUILTIN_EXTENSION),
            COMPONENT_EXTENSION,
        ),
    ]
}

fn key(role: ComponentRole, owns_view: bool) -> TemplateKey {
    TemplateKey::component(role, owns_view, BUILTIN_EXTENSION)
}

// ── OwnsView ──────────────────────────────────────────────────────────────────

const OWNS_VIEW_BUILDER: &str = r#"import RIBs

protocol ___VARIABLE_productName___Dependency: Dependency {
}

final class ___VARIABLE_productName___Component: Component<___VARIABLE_productName___Dependency> {
}

// MARK: - Builder

protocol ___VARIABLE_productName___Buildable: Buildable {
    func build(withListener listener: ___VARIABLE_productName___Listener) -> ___VARIABLE_productName___Routing
}

final class ___VARIABLE_productName___Builder: Builder<___VARIABLE_productName___Dependency>, ___VARIABLE_productName___Buildable {

    override init(dependency: ___VARIABLE_productName___Dependency) {
        super.init(dependency: dependency)
    }

    func build(withListener listener: ___VARIABLE_productName___Listener) -> ___VARIABLE_productName___Routing {
        let component = ___VARIABLE_productName___Component(dependency: dependency)
        let viewController = ___VARIABLE_productName___ViewController()
        let interactor = ___VARIABLE_productName___Interactor(presenter: viewController)
        interactor.listener = listener
        // ribgen:child-builders
        return ___VARIABLE_productName___Router(interactor: interactor, viewController: viewController)
    }
}
"#;

const OWNS_VIEW_INTERACTOR: &str = r#"import RIBs
import RxSwift

protocol ___VARIABLE_productName___Routing: ViewableRouting {
}

protocol ___VARIABLE_productName___Presentable: Presentable {
    var listener: ___VARIABLE_productName___PresentableListener? { get set }
}

protocol ___VARIABLE_productName___Listener: AnyObject {
}

final class ___VARIABLE_productName___Interactor: PresentableInteractor<___VARIABLE_productName___Presentable>, ___VARIABLE_productName___Interactable, ___VARIABLE_productName___PresentableListener {

    weak var router: ___VARIABLE_productName___Routing?
    weak var listener: ___VARIABLE_productName___Listener?

    override init(presenter: ___VARIABLE_productName___Presentable) {
        super.init(presenter: presenter)
        presenter.listener = self
    }

    override func didBecomeActive() {
        super.didBecomeActive()
    }

    override func willResignActive() {
        super.willResignActive()
    }
}
"#;

const OWNS_VIEW_ROUTER: &str = r#"import RIBs

protocol ___VARIABLE_productName___Interactable: Interactable {
    var router: ___VARIABLE_productName___Routing? { get set }
    var listener: ___VARIABLE_productName___Listener? { get set }
}

protocol ___VARIABLE_productName___ViewControllable: ViewControllable {
}

final class ___VARIABLE_productName___Router: ViewableRouter<___VARIABLE_productName___Interactable, ___VARIABLE_productName___ViewControllable>, ___VARIABLE_productName___Routing {

    override init(interactor: ___VARIABLE_productName___Interactable, viewController: ___VARIABLE_productName___ViewControllable) {
        super.init(interactor: interactor, viewController: viewController)
        interactor.router = self
    }
}
"#;

const OWNS_VIEW_VIEW_CONTROLLER: &str = r#"import RIBs
import RxSwift
import UIKit

protocol ___VARIABLE_productName___PresentableListener: AnyObject {
}

final class ___VARIABLE_productName___ViewController: UIViewController, ___VARIABLE_productName___Presentable, ___VARIABLE_productName___ViewControllable {

    weak var listener: ___VARIABLE_productName___PresentableListener?
}
"#;

// ── Default (no view) ─────────────────────────────────────────────────────────

const DEFAULT_BUILDER: &str = r#"import RIBs

protocol ___VARIABLE_productName___Dependency: Dependency {
    var ___VARIABLE_productName___ViewController: ___VARIABLE_productName___ViewControllable { get }
}

final class ___VARIABLE_productName___Component: Component<___VARIABLE_productName___Dependency> {

    fileprivate var ___VARIABLE_productName___ViewController: ___VARIABLE_productName___ViewControllable {
        return dependency.___VARIABLE_productName___ViewController
    }
}

// MARK: - Builder

protocol ___VARIABLE_productName___Buildable: Buildable {
    func build(withListener listener: ___VARIABLE_productName___Listener) -> ___VARIABLE_productName___Routing
}

final class ___VARIABLE_productName___Builder: Builder<___VARIABLE_productName___Dependency>, ___VARIABLE_productName___Buildable {

    override init(dependency: ___VARIABLE_productName___Dependency) {
        super.init(dependency: dependency)
    }

    func build(withListener listener: ___VARIABLE_productName___Listener) -> ___VARIABLE_productName___Routing {
        let component = ___VARIABLE_productName___Component(dependency: dependency)
        let interactor = ___VARIABLE_productName___Interactor()
        interactor.listener = listener
        // ribgen:child-builders
        return ___VARIABLE_productName___Router(interactor: interactor, viewController: component.___VARIABLE_productName___ViewController)
    }
}
"#;

const DEFAULT_INTERACTOR: &str = r#"import RIBs
import RxSwift

protocol ___VARIABLE_productName___Routing: Routing {
    func cleanupViews()
}

protocol ___VARIABLE_productName___Listener: AnyObject {
}

final class ___VARIABLE_productName___Interactor: Interactor, ___VARIABLE_productName___Interactable {

    weak var router: ___VARIABLE_productName___Routing?
    weak var listener: ___VARIABLE_productName___Listener?

    override init() {}

    override func didBecomeActive() {
        super.didBecomeActive()
    }

    override func willResignActive() {
        super.willResignActive()
        router?.cleanupViews()
    }
}
"#;

const DEFAULT_ROUTER: &str = r#"import RIBs

protocol ___VARIABLE_productName___Interactable: Interactable {
    var router: ___VARIABLE_productName___Routing? { get set }
    var listener: ___VARIABLE_productName___Listener? { get set }
}

protocol ___VARIABLE_productName___ViewControllable: ViewControllable {
}

final class ___VARIABLE_productName___Router: Router<___VARIABLE_productName___Interactable>, ___VARIABLE_productName___Routing {

    init(interactor: ___VARIABLE_productName___Interactable, viewController: ___VARIABLE_productName___ViewControllable) {
        self.viewController = viewController
        super.init(interactor: interactor)
        interactor.router = self
    }

    func cleanupViews() {
    }

    // MARK: - Private

    private let viewController: ___VARIABLE_productName___ViewControllable
}
"#;

// ── ComponentExtension ────────────────────────────────────────────────────────

const COMPONENT_EXTENSION: &str = r#"import RIBs

protocol ___VARIABLE_productName___Dependency___VARIABLE_childName___: Dependency {
}

extension ___VARIABLE_productName___Component: ___VARIABLE_childName___Dependency {
}
"#;
