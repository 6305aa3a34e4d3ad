use std::collections::HashSet;

use crate::models::checklist::{item_id, BookingGuide, ChecklistRecord};

/// Embedded behavior for the rendered view. `__CHECKLIST_ID__` is substituted
/// with the record id at render time. The progress indicator recomputes the
/// total from the checkboxes currently on the page rather than a cached count,
/// because the same script redisplays historical records of any size.
const CHECKLIST_SCRIPT: &str = r#"
<script>
    function loadCheckedItems(checklistId) {
        const checkedItems = JSON.parse(localStorage.getItem('checklist_' + checklistId) || '[]');
        checkedItems.forEach(function(itemId) {
            const checkbox = document.getElementById(itemId);
            if (checkbox) {
                checkbox.checked = true;
            }
        });
        updateProgress(checklistId, checkedItems);
    }

    function saveCheckStatus(checklistId, itemId, isChecked) {
        let checkedItems = JSON.parse(localStorage.getItem('checklist_' + checklistId) || '[]');

        if (isChecked && checkedItems.indexOf(itemId) === -1) {
            checkedItems.push(itemId);
        } else if (!isChecked) {
            checkedItems = checkedItems.filter(function(id) {
                return id !== itemId;
            });
        }

        localStorage.setItem('checklist_' + checklistId, JSON.stringify(checkedItems));

        fetch('/api/checklists/' + checklistId + '/checked', {
            method: 'PUT',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ checked: checkedItems })
        }).catch(function(err) {
            console.log('Could not persist checked state:', err);
        });

        updateProgress(checklistId, checkedItems);
    }

    function updateProgress(checklistId, checkedItems) {
        const totalItems = document.querySelectorAll('input[type="checkbox"]').length;
        const progressBar = document.getElementById('progress_bar_' + checklistId);
        const progressFill = document.getElementById('progress_fill_' + checklistId);

        if (progressBar && progressFill && totalItems > 0) {
            const percentage = Math.round((checkedItems.length / totalItems) * 100);
            progressBar.style.display = 'block';
            progressFill.style.width = percentage + '%';
            progressFill.textContent = checkedItems.length + ' / ' + totalItems + ' (' + percentage + '%)';
        }
    }

    document.addEventListener('DOMContentLoaded', function() {
        loadCheckedItems('__CHECKLIST_ID__');
    });
</script>
"#;

/// Renders a stored checklist plus its checked-item state into a
/// self-contained interactive HTML view.
pub fn render_checklist(record: &ChecklistRecord, checked: &HashSet<String>) -> String {
    let total = record.data.item_count();
    let checked_count = count_checked(record, checked);
    let percentage = if total > 0 {
        (checked_count as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    let mut html = String::new();
    html.push_str(&format!(
        r#"
    <div style="font-family: Arial, sans-serif; max-width: 100%;">
        <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 10px; margin-bottom: 20px;">
            <h2 style="margin: 0; font-size: 24px;">📋 Travel Checklist - {destination} ({duration})</h2>
            <p style="margin: 10px 0 0 0; font-size: 14px;">ID: {id}</p>
        </div>

        <div style="background: #e8f5e9; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
            <h3 style="margin: 0 0 10px 0; color: #2e7d32;">📦 Pre-trip checklist</h3>
            <p style="margin: 0; color: #558b2f; font-size: 13px;">💡 Tip: checked boxes are saved and restored the next time this checklist is opened</p>
            <div id="progress_bar_{id}" style="display: block; margin-top: 15px;">
                <div style="background: #e0e0e0; height: 30px; border-radius: 15px; overflow: hidden;">
                    <div id="progress_fill_{id}" style="background: linear-gradient(90deg, #4caf50, #66bb6a); height: 100%; width: {pct}%; display: flex; align-items: center; justify-content: center; color: white; font-weight: bold; transition: width 0.3s;">{done} / {total} ({pct}%)</div>
                </div>
            </div>
        </div>
"#,
        destination = escape_html(&record.destination),
        duration = escape_html(&record.duration),
        id = record.id,
        done = checked_count,
        total = total,
        pct = percentage,
    ));

    let mut item_counter = 0usize;
    for category in &record.data.categories {
        html.push_str(&format!(
            r#"
        <div style="margin-bottom: 25px; border: 2px solid #e0e0e0; border-radius: 8px; overflow: hidden;">
            <div style="background: #f5f5f5; padding: 12px 15px; font-weight: bold; font-size: 16px; border-bottom: 1px solid #e0e0e0;">
                🔹 {name}
            </div>
            <div style="padding: 15px; background: white;">
"#,
            name = escape_html(&category.name),
        ));

        for item in &category.items {
            let id = item_id(&record.id, item_counter);
            let badge = if item.required {
                "[Must bring]"
            } else {
                "[Optional]"
            };
            let badge_color = if item.required { "#d32f2f" } else { "#757575" };
            let checkbox_checked = if checked.contains(&id) { "checked" } else { "" };
            let note = if item.note.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<br><span style="color: #666; font-size: 13px; margin-left: 33px;">💡 {}</span>"#,
                    escape_html(&item.note)
                )
            };

            html.push_str(&format!(
                r#"
                <div style="display: flex; align-items: flex-start; margin-bottom: 12px; padding: 8px; border-radius: 6px;">
                    <input type="checkbox" id="{item_id}" {checked} onchange="saveCheckStatus('{checklist_id}', '{item_id}', this.checked)" style="width: 20px; height: 20px; margin-right: 12px; margin-top: 2px; cursor: pointer;">
                    <label for="{item_id}" style="cursor: pointer; flex: 1;">
                        <span style="color: {badge_color}; font-size: 12px; font-weight: bold;">{badge}</span>
                        <span style="color: #333; margin-left: 8px;">{name}</span>
                        {note}
                    </label>
                </div>
"#,
                item_id = id,
                checked = checkbox_checked,
                checklist_id = record.id,
                badge_color = badge_color,
                badge = badge,
                name = escape_html(&item.name),
                note = note,
            ));
            item_counter += 1;
        }

        html.push_str(
            r#"
            </div>
        </div>
"#,
        );
    }

    html.push_str(&render_booking_guides(record));
    html.push_str(&render_tips(record));

    html.push_str(&format!(
        r#"
        <div style="background: #f5f5f5; padding: 15px; border-radius: 8px; text-align: center; color: #666; font-size: 13px; margin-top: 20px;">
            <p style="margin: 5px 0;">💾 This checklist has been saved locally</p>
            <p style="margin: 5px 0; color: #2196f3; font-weight: bold;">Checked items are stored as: {id}_checked.json</p>
        </div>
    </div>
"#,
        id = record.id,
    ));

    html.push_str(&CHECKLIST_SCRIPT.replace("__CHECKLIST_ID__", &record.id));
    html
}

/// Only ids that map to an item actually on the page count toward progress.
fn count_checked(record: &ChecklistRecord, checked: &HashSet<String>) -> usize {
    (0..record.data.item_count())
        .filter(|&index| checked.contains(&item_id(&record.id, index)))
        .count()
}

fn render_booking_guides(record: &ChecklistRecord) -> String {
    let guides = &record.data.booking_guides;
    // Fixed key set, fixed display order.
    let sections: [(&Option<BookingGuide>, &str, &str); 3] = [
        (&guides.transport, "✈️ Transport booking", "#2196f3"),
        (&guides.hotel, "🏨 Hotel booking", "#4caf50"),
        (&guides.attractions, "🎯 Attraction booking", "#ff9800"),
    ];

    if sections.iter().all(|(guide, _, _)| guide.is_none()) {
        return String::new();
    }

    let mut html = String::from(
        r#"
        <div style="background: #e3f2fd; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
            <h3 style="margin: 0 0 10px 0; color: #1565c0;">🎫 Booking guides</h3>
        </div>
"#,
    );

    for (guide, title, color) in sections {
        let guide = match guide {
            Some(guide) => guide,
            None => continue,
        };

        html.push_str(&format!(
            r#"
            <div style="margin-bottom: 20px; padding: 15px; border-left: 4px solid {color}; background: #f5f5f5;">
                <h4 style="margin: 0 0 10px 0;">{title}</h4>
                <p style="margin: 0; color: #555; line-height: 1.6;">{text}</p>
"#,
            color = color,
            title = title,
            text = escape_html(&guide.guide),
        ));

        if !guide.platforms.is_empty() {
            html.push_str(
                r#"<p style="margin: 10px 0 5px 0; color: #333; font-weight: bold;">Recommended platforms:</p><ul style="margin: 0; color: #555;">"#,
            );
            for platform in &guide.platforms {
                html.push_str(&format!(
                    r#"<li style="margin-bottom: 5px;">{}</li>"#,
                    escape_html(platform)
                ));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }

    html
}

fn render_tips(record: &ChecklistRecord) -> String {
    if record.data.tips.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        r#"
        <div style="background: #fff3e0; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
            <h3 style="margin: 0 0 10px 0; color: #e65100;">💡 Friendly tips</h3>
"#,
    );
    for tip in &record.data.tips {
        html.push_str(&format!(
            r#"<p style="margin: 8px 0; color: #555;">• {}</p>"#,
            escape_html(tip)
        ));
    }
    html.push_str("</div>");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
