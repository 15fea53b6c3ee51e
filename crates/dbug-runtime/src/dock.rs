//! Dock markup.
//!
//! The widget finds everything it needs through the `data-dbug*` attributes
//! and the fixed `dbug-drawer` id below; keep them stable.

/// Wrap flushed dump fragments into the dock. Fragments are inserted
/// verbatim into the dump target.
pub fn render_dock(dump_html: &str) -> String {
    format!(
        r#"<div class="dbug-dock" data-dbug>
  <div class="dbug-drawer" id="dbug-drawer" aria-hidden="true">
    <div class="dbug-resize" aria-hidden="true"></div>

    <div class="dbug-topbar">
      <div class="dbug-tabs" role="tablist" aria-label="dBug panels">
        <button class="dbug-tab is-active" role="tab" aria-selected="true" data-dbug-tab="dump">
          dBug <span class="dbug-count" data-dbug-count="dump">0</span>
        </button>
        <button class="dbug-tab" role="tab" aria-selected="false" data-dbug-tab="info">Info</button>
        <button class="dbug-tab" role="tab" aria-selected="false" data-dbug-tab="request">Request</button>
      </div>

      <div class="dbug-actions">
        <button type="button" class="dbug-iconbtn" data-dbug-action="collapseAll" title="Collapse all">&#8211;</button>
        <button type="button" class="dbug-iconbtn" data-dbug-action="expandAll" title="Expand all">+</button>
        <button type="button" class="dbug-iconbtn" data-dbug-action="close" title="Close">&#215;</button>
      </div>
    </div>

    <div class="dbug-panels">
      <section class="dbug-panel is-active" role="tabpanel" data-dbug-panel="dump">
        <div class="dbug-panel-body" data-dbug-target="dump">
{dumps}
        </div>
      </section>

      <section class="dbug-panel" role="tabpanel" data-dbug-panel="info">
        <div class="dbug-panel-body" data-dbug-target="info">
          <div class="dbug-note">Info panel.</div>
        </div>
      </section>

      <section class="dbug-panel" role="tabpanel" data-dbug-panel="request">
        <div class="dbug-panel-body" data-dbug-target="request">
          <div class="dbug-note">Request panel.</div>
        </div>
      </section>
    </div>
  </div>

  <button type="button" class="dbug-toggle" aria-expanded="false" aria-controls="dbug-drawer">
    <span class="dbug-toggle-icon" aria-hidden="true"></span>
    <span class="dbug-toggle-text">dBug</span>
  </button>
</div>"#,
        dumps = dump_html
    )
}
